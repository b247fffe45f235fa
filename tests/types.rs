use hint_mini::{Role, Target, TargetAction};
use kurbo::Rect;

#[test]
fn roles_parse_from_either_spelling() {
    assert_eq!(Role::from_name("AXButton"), Role::Button);
    assert_eq!(Role::from_name("button"), Role::Button);
    assert_eq!(Role::from_name("AXMenuItem"), Role::MenuItem);
    assert_eq!(Role::from_name("AXTextArea"), Role::TextField);
    assert_eq!(Role::from_name("AXSlider"), Role::Other("AXSlider".to_string()));
}

#[test]
fn actions_parse_and_drop_unknowns() {
    assert_eq!(TargetAction::from_name("AXPress"), Some(TargetAction::Press));
    assert_eq!(TargetAction::from_name("show-menu"), Some(TargetAction::ShowMenu));
    assert_eq!(TargetAction::from_name("AXShowMenu"), Some(TargetAction::ShowMenu));
    assert_eq!(TargetAction::from_name("AXScrollToVisible"), None);

    let target = Target::new(1, "Fonts", Rect::ZERO).with_action_names([
        "AXPress",
        "AXScrollToVisible",
        "AXShowMenu",
    ]);
    assert_eq!(target.actions, vec![TargetAction::Press, TargetAction::ShowMenu]);
    assert!(target.supports(TargetAction::ShowMenu));
    assert!(!target.supports(TargetAction::Increment));
}

#[test]
fn builder_helpers() {
    let target = Target::new(7, "Search", Rect::new(0.0, 0.0, 10.0, 10.0))
        .with_role(Role::TextField)
        .with_identifier("search-field");
    assert_eq!(target.role, Role::TextField);
    assert_eq!(target.identifier.as_deref(), Some("search-field"));
}

#[test]
fn overlap_needs_shared_area_or_identical_boxes() {
    let a = Target::new(0, "a", Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = Target::new(1, "b", Rect::new(5.0, 5.0, 15.0, 15.0));
    let touching = Target::new(2, "c", Rect::new(10.0, 0.0, 20.0, 10.0));
    let point = Target::new(3, "d", Rect::ZERO);
    let same_point = Target::new(4, "e", Rect::ZERO);

    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&touching));
    assert!(point.overlaps(&same_point));
}
