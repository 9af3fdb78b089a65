use hostslot_core::{
    check_wrapper, wrapper_version, RenderFn, SlotContent, SlotMount, SlotProps, SlotRegistry,
    ViewNode,
};
use std::cell::RefCell;
use std::rc::Rc;

const EXPERIENCE: &str = "47147";
const RIVAL: &str = "74174";
const SLOT: &str = "product-banner";

fn banner(text: &'static str) -> RenderFn {
    RenderFn::new(move |props| {
        SlotContent::Tree(
            ViewNode::element("section")
                .with_attribute("data-slot", props.slot_id.clone())
                .with_text(text),
        )
    })
}

#[test]
fn experience_takes_over_and_hands_back_a_mounted_slot() {
    let registry = SlotRegistry::new();
    let default = ViewNode::element("p").with_text("static banner");
    let first = SlotMount::mount(
        &registry,
        SlotProps::new(SLOT).with_children(default.clone()),
        || {},
    );
    let second = SlotMount::mount(&registry, SlotProps::new(SLOT), || {});

    assert!(check_wrapper(wrapper_version()));
    let experience = registry.handle(EXPERIENCE, SLOT);
    experience.claim();
    assert!(experience.is_owner());
    assert!(experience.render(banner("summer sale")));

    assert_eq!(first.redraw_count(), 1);
    assert_eq!(second.redraw_count(), 1);
    let drawn = first.render().expect("experience content");
    assert_eq!(drawn.text.as_deref(), Some("summer sale"));
    assert_eq!(
        drawn.attributes.get("data-slot").map(String::as_str),
        Some(SLOT)
    );

    experience.release();
    assert_eq!(first.redraw_count(), 2);
    assert_eq!(first.render(), Some(default));
    assert_eq!(second.render(), None);
}

#[test]
fn rival_cannot_take_over_or_release() {
    let registry = SlotRegistry::new();
    let mount = SlotMount::mount(&registry, SlotProps::new(SLOT), || {});

    let experience = registry.handle(EXPERIENCE, SLOT);
    let rival = registry.handle(RIVAL, SLOT);
    experience.claim();
    rival.claim();
    assert!(rival.is_claimed());
    assert!(!rival.is_owner());

    assert!(experience.render(banner("mine")));
    assert!(!rival.render(banner("theirs")));
    rival.release();

    assert_eq!(registry.owner(SLOT).as_deref(), Some(EXPERIENCE));
    assert_eq!(mount.redraw_count(), 1);
    assert_eq!(
        mount.render().and_then(|node| node.text),
        Some("mine".to_string())
    );
}

#[test]
fn slot_can_be_reclaimed_after_release() {
    let registry = SlotRegistry::new();
    let experience = registry.handle(EXPERIENCE, SLOT);
    let rival = registry.handle(RIVAL, SLOT);

    experience.claim();
    experience.release();
    rival.claim();
    assert!(rival.is_owner());
    assert!(!experience.is_owner());
}

#[test]
fn unmounted_views_stop_receiving_redraws() {
    let registry = SlotRegistry::new();
    let events = Rc::new(RefCell::new(Vec::new()));

    let kept_log = events.clone();
    let kept = SlotMount::mount(&registry, SlotProps::new(SLOT), move || {
        kept_log.borrow_mut().push("kept")
    });
    let dropped_log = events.clone();
    let dropped = SlotMount::mount(&registry, SlotProps::new(SLOT), move || {
        dropped_log.borrow_mut().push("dropped")
    });
    drop(dropped);

    let experience = registry.handle(EXPERIENCE, SLOT);
    experience.claim();
    experience.render(RenderFn::new(|_| SlotContent::from("<em>hi</em>")));

    assert_eq!(*events.borrow(), vec!["kept"]);
    assert_eq!(registry.slot(SLOT).subscriber_count, 1);
    assert_eq!(
        kept.render().and_then(|node| node.inner_html),
        Some("<em>hi</em>".to_string())
    );
}

#[test]
fn view_tree_serializes_for_the_host_runtime() {
    let node = ViewNode::raw_markup("<b>x</b>").with_attribute("class", "slot");
    let json = serde_json::to_value(&node).expect("serialize view node");
    assert_eq!(json["tag"], "div");
    assert_eq!(json["inner_html"], "<b>x</b>");
    assert_eq!(json["attributes"]["class"], "slot");
    assert!(json.get("children").is_none());
    assert!(json.get("text").is_none());
}
