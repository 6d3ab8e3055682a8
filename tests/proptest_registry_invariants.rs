//! Property tests for the window registry and the geometry helpers.
//!
//! 1. The ordered list and the id map always hold the same ids
//! 2. List order matches ascending z-index and z-indices are unique
//! 3. After activation the z-indices are exactly 1..N and the window is focused
//! 4. Focus never points at a hidden or missing window after hide/unmount
//! 5. Toggling fullscreen twice restores the framing
//! 6. Clamped framings stay inside the container
//! 7. Percent/pixel conversion round-trips

use desk_wm::layout::{
    Framing, Size, Unit, clamp_percent_framing, to_percent_framing, to_pixel_framing,
};
use desk_wm::window::WindowRegistry;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Mount(u8),
    Unmount(u8),
    Activate(u8),
    Hide(u8),
    Show(u8),
    SetFraming(u8),
    ToggleFullscreen(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8).prop_map(Op::Mount),
        (0u8..8).prop_map(Op::Unmount),
        (0u8..8).prop_map(Op::Activate),
        (0u8..8).prop_map(Op::Hide),
        (0u8..8).prop_map(Op::Show),
        (0u8..8).prop_map(Op::SetFraming),
        (0u8..8).prop_map(Op::ToggleFullscreen),
    ]
}

fn id(n: u8) -> String {
    format!("w{n}")
}

fn apply(registry: &mut WindowRegistry, op: &Op) {
    match op {
        Op::Mount(n) => registry.mount(&id(*n)),
        Op::Unmount(n) => registry.unmount(&id(*n)),
        Op::Activate(n) => registry.activate_window(&id(*n)),
        Op::Hide(n) => registry.hide_window(&id(*n)),
        Op::Show(n) => registry.show_window(&id(*n)),
        Op::SetFraming(n) => {
            let offset = *n as f64;
            registry.set_framing(&id(*n), Framing::percent(offset, offset, 40.0, 30.0));
        }
        Op::ToggleFullscreen(n) => registry.toggle_fullscreen(&id(*n)),
    }
}

fn registry_after(ops: &[Op]) -> WindowRegistry {
    let mut registry = WindowRegistry::new();
    for op in ops {
        apply(&mut registry, op);
    }
    registry
}

proptest! {
    #[test]
    fn list_and_map_stay_in_sync(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = registry_after(&ops);
        prop_assert!(registry.is_consistent());
        let ids: Vec<&str> = registry.ids().collect();
        prop_assert_eq!(ids.len(), registry.len());
        for window in registry.windows() {
            prop_assert!(registry.contains(window.id()));
        }
    }

    #[test]
    fn z_order_is_strictly_ascending(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = registry_after(&ops);
        let zs: Vec<u32> = registry.windows().map(|w| w.z_index()).collect();
        for pair in zs.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(zs.iter().all(|z| *z >= 1));
    }

    #[test]
    fn activation_renumbers_densely(
        ops in prop::collection::vec(op_strategy(), 0..64),
        target in 0u8..8,
    ) {
        let mut registry = registry_after(&ops);
        registry.mount(&id(target));
        registry.activate_window(&id(target));
        let zs: Vec<u32> = registry.windows().map(|w| w.z_index()).collect();
        let expected: Vec<u32> = (1..=registry.len() as u32).collect();
        prop_assert_eq!(zs, expected);
        let target_id = id(target);
        prop_assert_eq!(registry.focused_id(), Some(target_id.as_str()));
        prop_assert_eq!(registry.top_window().map(|w| w.id().to_owned()), Some(id(target)));
        prop_assert!(!registry.is_hidden(&id(target)));
    }

    #[test]
    fn focus_is_present_and_visible_after_hide_or_unmount(
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut registry = WindowRegistry::new();
        for op in &ops {
            apply(&mut registry, op);
            if matches!(op, Op::Hide(_) | Op::Unmount(_))
                && let Some(focused) = registry.focused_id()
            {
                prop_assert!(registry.contains(focused));
                prop_assert!(!registry.is_hidden(focused));
            }
            if let Some(focused) = registry.focused_id() {
                prop_assert!(registry.contains(focused));
            }
        }
    }

    #[test]
    fn fullscreen_toggle_is_an_involution(
        x in 0.0f64..60.0,
        y in 0.0f64..60.0,
        w in 1.0f64..40.0,
        h in 1.0f64..40.0,
    ) {
        let framing = Framing::percent(x, y, w, h);
        let mut registry = WindowRegistry::new();
        registry.mount("a");
        registry.set_framing("a", framing);
        registry.toggle_fullscreen("a");
        registry.toggle_fullscreen("a");
        prop_assert_eq!(registry.framing("a"), Some(framing));
        prop_assert!(!registry.is_fullscreen("a"));
    }

    #[test]
    fn clamped_framing_stays_in_bounds(
        x in -200.0f64..200.0,
        y in -200.0f64..200.0,
        w in 0.0f64..300.0,
        h in 0.0f64..300.0,
        bw in 1.0f64..4000.0,
        bh in 1.0f64..4000.0,
        min_w in 0.0f64..2000.0,
        min_h in 0.0f64..2000.0,
    ) {
        let bounds = Size::new(bw, bh);
        let out = clamp_percent_framing(
            Framing::percent(x, y, w, h),
            bounds,
            Size::new(min_w, min_h),
            None,
        );
        let eps = 1e-9;
        prop_assert_eq!(out.unit, Unit::Percent);
        prop_assert!(out.size.width <= 100.0 + eps && out.size.height <= 100.0 + eps);
        prop_assert!(out.position.x >= -eps && out.position.y >= -eps);
        prop_assert!(out.position.x + out.size.width <= 100.0 + eps);
        prop_assert!(out.position.y + out.size.height <= 100.0 + eps);
    }

    #[test]
    fn percent_pixel_round_trip(
        x in -500.0f64..3000.0,
        y in -500.0f64..3000.0,
        w in 1.0f64..3000.0,
        h in 1.0f64..3000.0,
        bw in 1.0f64..4000.0,
        bh in 1.0f64..4000.0,
    ) {
        let bounds = Size::new(bw, bh);
        let px = Framing::px(x, y, w, h);
        let back = to_pixel_framing(to_percent_framing(px, bounds), bounds);
        prop_assert_eq!(back.unit, Unit::Px);
        let tol = 1e-6;
        prop_assert!((back.position.x - x).abs() < tol);
        prop_assert!((back.position.y - y).abs() < tol);
        prop_assert!((back.size.width - w).abs() < tol);
        prop_assert!((back.size.height - h).abs() < tol);
    }
}
