//! End-to-end flow: mount, fetch, click, reload.

use std::cell::RefCell;
use std::rc::Rc;

use catnav_core::{CategoryFilter, CategoryRecord, CategorySource, FetchError};
use catnav_sidebar::{
    CategorySidebar, ClickTarget, HostLayout, HostListView, ListIntegration, MountTarget,
};

struct FixedSource(Vec<CategoryRecord>);

impl CategorySource for FixedSource {
    fn fetch_categories_with_counts(&self) -> Result<Vec<CategoryRecord>, FetchError> {
        Ok(self.0.clone())
    }
}

struct MockHost {
    model: &'static str,
    layout: HostLayout,
    mounted_at: Option<MountTarget>,
    reloads: Vec<Option<CategoryFilter>>,
}

impl MockHost {
    fn new(model: &'static str) -> Self {
        Self {
            model,
            layout: HostLayout {
                has_primary_toolbar: true,
                ..HostLayout::default()
            },
            mounted_at: None,
            reloads: Vec::new(),
        }
    }
}

impl HostListView for MockHost {
    fn model_name(&self) -> &str {
        self.model
    }

    fn layout(&self) -> HostLayout {
        self.layout
    }

    fn mount_sidebar(&mut self, target: MountTarget) {
        self.mounted_at = Some(target);
    }

    fn reload(&mut self, filter: Option<CategoryFilter>) {
        self.reloads.push(filter);
    }
}

fn records() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new(1, "Tools"),
        CategoryRecord::new(2, "Drills").with_parent(1).with_count(3),
        CategoryRecord::new(3, "Bits").with_parent(2),
    ]
}

#[test]
fn click_to_reload_round_trip() {
    let host = Rc::new(RefCell::new(MockHost::new("nomenclature")));
    let mut sidebar = CategorySidebar::new();
    let integration = ListIntegration::new("nomenclature");

    assert!(integration.attach(&mut sidebar, &host));
    assert_eq!(
        host.borrow().mounted_at,
        Some(MountTarget::PrimaryToolbar)
    );

    sidebar.activate(&FixedSource(records())).unwrap();

    let node = ClickTarget::new(vec!["category-node".into()], Some(2));
    assert!(sidebar.handle_click(&node));
    let reset = ClickTarget::new(vec!["category-reset".into()], None);
    assert!(sidebar.handle_click(&reset));

    assert_eq!(
        host.borrow().reloads,
        vec![Some(CategoryFilter::ChildOf(2)), None]
    );
    assert_eq!(sidebar.selected(), None);
}

#[test]
fn attach_skips_other_data_types() {
    let host = Rc::new(RefCell::new(MockHost::new("partner")));
    let mut sidebar = CategorySidebar::new();
    let integration = ListIntegration::new("nomenclature");

    assert!(!integration.attach(&mut sidebar, &host));
    assert_eq!(host.borrow().mounted_at, None);

    sidebar.activate(&FixedSource(records())).unwrap();
    let node = ClickTarget::new(vec!["category-node".into()], Some(2));
    sidebar.handle_click(&node);
    assert!(host.borrow().reloads.is_empty());
}

#[test]
fn mount_falls_back_to_view_root() {
    let host = Rc::new(RefCell::new(MockHost {
        layout: HostLayout::default(),
        ..MockHost::new("nomenclature")
    }));
    let mut sidebar = CategorySidebar::new();
    ListIntegration::new("nomenclature").attach(&mut sidebar, &host);
    assert_eq!(host.borrow().mounted_at, Some(MountTarget::ViewRoot));
}
