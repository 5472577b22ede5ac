//! Provider lifecycle across a small tree of mounted providers

use std::sync::Arc;

use pretty_assertions::assert_eq;
use track_core::{ProviderProps, ProviderState, TrackingContext, TrackingProvider};
use track_harness::EventButton;
use track_test_utils::RecordingTrigger;
use track_test_utils::fixtures::{context_props, prop_props};

/// A page provider with two independent widget providers below it.
struct Page {
    page: TrackingProvider,
    left: TrackingProvider,
    right: TrackingProvider,
}

impl Page {
    fn new(spy: &RecordingTrigger) -> Self {
        Self {
            page: TrackingProvider::new(context_props().trigger(spy.trigger())),
            left: TrackingProvider::new(prop_props()),
            right: TrackingProvider::new(ProviderProps::new().fields([("side", "right")])),
        }
    }

    /// One composition pass, outermost first.
    fn render(&mut self, root: &TrackingContext) -> (TrackingContext, TrackingContext) {
        let page = self.page.render(root).clone();
        let left = self.left.render(&page).clone();
        let right = self.right.render(&page).clone();
        (left, right)
    }
}

#[test]
fn test_unchanged_pass_reuses_every_snapshot() {
    let spy = RecordingTrigger::new();
    let root = TrackingContext::root();
    let mut tree = Page::new(&spy);
    assert_eq!(tree.left.state(), ProviderState::Unpublished);

    let (left_a, right_a) = tree.render(&root);
    let (left_b, right_b) = tree.render(&root);

    assert!(Arc::ptr_eq(&left_a.data, &left_b.data));
    assert!(Arc::ptr_eq(&right_a.data, &right_b.data));
}

#[test]
fn test_page_update_reaches_both_widgets() {
    let spy = RecordingTrigger::new();
    let root = TrackingContext::root();
    let mut tree = Page::new(&spy);
    tree.render(&root);

    tree.page
        .set_props(context_props().fields([("zombie", "running")]).trigger(spy.trigger()));
    let (left, right) = tree.render(&root);

    EventButton::new("datepicker.close").click(&left).unwrap();
    EventButton::new("datepicker.close").click(&right).unwrap();

    let calls = spy.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].fields["zombie"], "running");
    assert_eq!(calls[0].fields["who"], "you");
    assert_eq!(calls[1].fields["who"], "me");
    assert_eq!(calls[1].fields["side"], "right");
}

#[test]
fn test_widget_update_leaves_sibling_alone() {
    let spy = RecordingTrigger::new();
    let root = TrackingContext::root();
    let mut tree = Page::new(&spy);
    let (_, right_before) = tree.render(&root);

    tree.left.set_props(prop_props().overwrite(true));
    let (left, right_after) = tree.render(&root);

    assert!(Arc::ptr_eq(&right_before.data, &right_after.data));
    assert!(left.data.trigger.is_none());
}
