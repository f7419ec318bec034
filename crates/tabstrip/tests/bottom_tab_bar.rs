//! Integration tests for the bottom tab bar frame and press routing.

use std::cell::RefCell;

use tabstrip::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Delegate producing string nodes and recording what it was asked for.
#[derive(Default)]
struct RecordingDelegate {
    rendered_labels: bool,
    intercept_presses: bool,
    presses: RefCell<Vec<(String, usize)>>,
    label_tints: RefCell<Vec<Color>>,
}

impl TabBarDelegate for RecordingDelegate {
    type Node = String;

    fn label(&self, scene: &TabScene, tint: Color) -> LabelSource<String> {
        self.label_tints.borrow_mut().push(tint);
        if self.rendered_labels {
            LabelSource::render(|scene: &TabScene, tint: Color| format!("{}@{}", scene.route.key, tint))
        } else if scene.route.key == "hidden" {
            LabelSource::None
        } else {
            LabelSource::text(scene.route.key.clone())
        }
    }

    fn render_icon(&self, scene: &TabScene, _tint: Color) -> Option<String> {
        Some(format!("icon-{}", scene.index))
    }

    fn test_ids(&self, scene: &TabScene) -> Option<TestIds> {
        Some(TestIds {
            test_id: Some(format!("tab-{}", scene.route.key)),
            accessibility_label: Some(format!("{} tab", scene.route.key)),
        })
    }

    fn on_press(&self, event: &TabPressEvent<'_>, navigator: &mut dyn Navigator) {
        self.presses
            .borrow_mut()
            .push((event.previous.key.clone(), event.scene.index));
        if !self.intercept_presses {
            navigator.jump_to_index(event.scene.index);
        }
    }
}

fn state() -> NavigationState {
    NavigationState::from_keys(["home", "search", "library", "profile", "settings"])
}

fn tall() -> LayoutEnvironment {
    LayoutEnvironment::portrait(Size::new(700.0, 900.0))
}

fn assert_channels(actual: Color, expected: Color) {
    let channels = |c: Color| [c.r, c.g, c.b, c.a];
    for (a, e) in channels(actual).into_iter().zip(channels(expected)) {
        assert!((a - e).abs() < 1e-6, "{actual:?} != {expected:?}");
    }
}

fn colors() -> TabBarOptions {
    TabBarOptions::default()
        .with_tint_colors(Color::from_hex("#111").unwrap(), Color::from_hex("#eee").unwrap())
        .with_background_colors(Color::WHITE, Color::TRANSPARENT)
}

#[test]
fn steady_state_frame() {
    init_tracing();
    let bar = BottomTabBar::new(colors());
    let state = state().with_index(2);
    let frame = bar.frame(&state, tall(), 2.0, &RecordingDelegate::default());

    assert_eq!(frame.mode, LayoutMode::new(Axis::Horizontal, Density::Regular));
    assert_eq!(frame.bar.height, 49.0);
    assert_eq!(frame.items.len(), 5);

    for item in &frame.items {
        let focused = item.scene.index == 2;
        assert_eq!(item.scene.focused, focused);
        if focused {
            assert_eq!(item.tint_color, Color::from_hex("#111").unwrap());
            assert_eq!(item.background_color, Color::WHITE);
            assert_eq!(item.focus_progress, 1.0);
        } else {
            assert_eq!(item.tint_color, Color::from_hex("#eee").unwrap());
            assert_eq!(item.background_color, Color::TRANSPARENT);
            assert_eq!(item.focus_progress, 0.0);
        }
    }
}

#[test]
fn mid_transition_frame() {
    let bar = BottomTabBar::new(colors());
    let frame = bar.frame(&state(), tall(), 1.5, &RecordingDelegate::default());

    // #111 and #eee meet at 0.5; white and transparent blend every channel
    let half_tint = Color::new(0.5, 0.5, 0.5, 1.0);
    let half_background = Color::new(0.5, 0.5, 0.5, 0.5);
    for index in [1, 2] {
        let item = &frame.items[index];
        assert!((item.focus_progress - 0.5).abs() < 1e-6);
        assert_channels(item.tint_color, half_tint);
        assert_channels(item.background_color, half_background);
    }
    assert_eq!(frame.items[1].background_color.to_hex(), "#80808080");

    for index in [0, 3, 4] {
        assert_eq!(frame.items[index].tint_color, Color::from_hex("#eee").unwrap());
        assert_eq!(frame.items[index].background_color, Color::TRANSPARENT);
    }
}

#[test]
fn labels_receive_interpolated_tint() {
    let bar = BottomTabBar::new(colors());
    let delegate = RecordingDelegate::default();
    let frame = bar.frame(&state(), tall(), 0.25, &delegate);

    let tints = delegate.label_tints.borrow();
    assert_eq!(tints.len(), frame.items.len());
    for (tint, item) in tints.iter().zip(&frame.items) {
        assert_eq!(*tint, item.tint_color);
    }
    assert_eq!(tints[4], Color::from_hex("#eee").unwrap());
}

#[test]
fn text_labels_carry_interpolated_tint() {
    let bar = BottomTabBar::new(colors());
    let frame = bar.frame(&state(), tall(), 0.0, &RecordingDelegate::default());

    let item = &frame.items[0];
    match &item.label {
        Some(LabelContent::Text {
            text,
            color,
            placement,
            allow_font_scaling,
        }) => {
            assert_eq!(text, "home");
            assert_eq!(*color, item.tint_color);
            assert_eq!(*placement, LabelPlacement::Beside);
            assert!(*allow_font_scaling);
        }
        other => panic!("expected text label, got {other:?}"),
    }

    let icon = item.icon.as_ref().expect("icon");
    assert_eq!(icon.node, "icon-0");
    assert_eq!(icon.flex_grow, 0.0);
    assert_eq!(item.test_id(), Some("tab-home"));
    assert_eq!(item.accessibility_label(), Some("home tab"));
}

#[test]
fn stacked_layout_places_labels_beneath() {
    let bar = BottomTabBar::new(colors());
    let narrow = LayoutEnvironment::portrait(Size::new(375.0, 812.0));
    let frame = bar.frame(&state(), narrow, 0.0, &RecordingDelegate::default());

    assert_eq!(frame.mode, LayoutMode::STACKED);
    let item = &frame.items[3];
    assert!(matches!(
        item.label,
        Some(LabelContent::Text {
            placement: LabelPlacement::Beneath,
            ..
        })
    ));
    assert_eq!(item.icon.as_ref().map(|i| i.flex_grow), Some(1.0));
}

#[test]
fn rendered_labels_receive_scene_and_tint() {
    let bar = BottomTabBar::new(colors());
    let delegate = RecordingDelegate {
        rendered_labels: true,
        ..Default::default()
    };
    let frame = bar.frame(&state(), tall(), 4.0, &delegate);

    let expected = format!("settings@{}", Color::from_hex("#111").unwrap());
    assert_eq!(frame.items[4].label, Some(LabelContent::Node(expected)));
}

#[test]
fn suppressed_content() {
    let delegate = RecordingDelegate::default();
    let state = NavigationState::from_keys(["hidden", "shown"]);

    let frame = BottomTabBar::new(colors()).frame(&state, tall(), 0.0, &delegate);
    assert_eq!(frame.items[0].label, None);
    assert!(frame.items[1].label.is_some());

    let no_labels = BottomTabBar::new(colors().with_show_label(false));
    let frame = no_labels.frame(&state, tall(), 0.0, &delegate);
    assert!(frame.items.iter().all(|item| item.label.is_none()));
    // Without labels the icon fills the item even when horizontal
    assert_eq!(frame.items[1].icon.as_ref().map(|i| i.flex_grow), Some(1.0));

    let no_icons = BottomTabBar::new(colors().with_show_icon(false));
    let frame = no_icons.frame(&state, tall(), 0.0, &delegate);
    assert!(frame.items.iter().all(|item| item.icon.is_none()));
}

#[test]
fn compact_bar_in_short_landscape() {
    let bar = BottomTabBar::new(colors()).with_platform(Platform::ios(17));
    let env = LayoutEnvironment::landscape(Size::new(844.0, 390.0));
    let frame = bar.frame(&state(), env, 0.0, &RecordingDelegate::default());

    assert_eq!(frame.mode, LayoutMode::new(Axis::Horizontal, Density::Compact));
    assert_eq!(frame.bar.height, 29.0);
    assert_eq!(frame.items[0].metrics.align, tabstrip::tab_bar::CrossAlignment::Center);
}

#[test]
fn non_adaptive_bar_is_always_stacked() {
    let bar = BottomTabBar::new(colors().with_adaptive(false)).with_device_class(DeviceClass::Tablet);
    for env in [
        tall(),
        LayoutEnvironment::landscape(Size::new(844.0, 390.0)),
        LayoutEnvironment::default(),
    ] {
        assert_eq!(bar.frame(&state(), env, 0.0, &RecordingDelegate::default()).mode, LayoutMode::STACKED);
    }
}

#[test]
fn empty_state_degrades_to_empty_frame() {
    init_tracing();
    let frame = BottomTabBar::default().frame(
        &NavigationState::default(),
        tall(),
        0.0,
        &RecordingDelegate::default(),
    );
    assert!(frame.items.is_empty());
    assert_eq!(frame.bar.height, 49.0);
}

#[test]
fn frame_is_idempotent() {
    let bar = BottomTabBar::new(colors());
    let delegate = RecordingDelegate::default();
    let a = bar.frame(&state(), tall(), 3.25, &delegate);
    let b = bar.frame(&state(), tall(), 3.25, &delegate);
    assert_eq!(a, b);
}

#[test]
fn default_press_jumps_to_item() {
    let bar = BottomTabBar::default();
    let delegate = RecordingDelegate::default();
    let state = state().with_index(1);
    let mut jumps = Vec::new();

    assert!(bar.press(&state, 3, &delegate, &mut |index: usize| jumps.push(index)));
    assert_eq!(jumps, vec![3]);
    assert_eq!(delegate.presses.borrow().as_slice(), &[("search".to_string(), 3)]);
}

#[test]
fn intercepted_press_does_not_jump() {
    let bar = BottomTabBar::default();
    let delegate = RecordingDelegate {
        intercept_presses: true,
        ..Default::default()
    };
    let mut jumps = Vec::new();

    assert!(bar.press(&state(), 2, &delegate, &mut |index: usize| jumps.push(index)));
    assert!(jumps.is_empty());
    assert_eq!(delegate.presses.borrow().len(), 1);
}

#[test]
fn out_of_range_press_is_ignored() {
    init_tracing();
    let bar = BottomTabBar::default();
    let delegate = RecordingDelegate::default();
    let mut jumps = Vec::new();

    assert!(!bar.press(&state(), 5, &delegate, &mut |index: usize| jumps.push(index)));
    assert!(jumps.is_empty());
    assert!(delegate.presses.borrow().is_empty());
}

#[test]
fn options_from_toml_drive_the_frame() {
    let options = TabBarOptions::from_toml(
        r##"
        active_tint_color = "#ff0000"
        inactive_tint_color = "#00ff00"
        tab_style = "max-width: 50px"
        "##,
    )
    .unwrap();
    let bar = BottomTabBar::new(options);

    // 5 items at 50 fit in 300
    let env = LayoutEnvironment::portrait(Size::new(300.0, 900.0));
    let frame = bar.frame(&state(), env, 0.0, &RecordingDelegate::default());

    assert!(frame.mode.is_horizontal());
    assert_eq!(frame.items[0].tint_color, Color::RED);
    assert_eq!(frame.items[1].tint_color, Color::GREEN);
}
