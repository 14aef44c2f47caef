use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i32
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }
}

/// A surface that records every position write.
#[derive(Clone, Debug, Default)]
struct Recorder {
    inner: BoxSurface,
    writes: Vec<(Dim, f32)>,
}

impl Recorder {
    fn new(inner: BoxSurface) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }

    fn writes_for(&self, dim: Dim) -> usize {
        self.writes.iter().filter(|(d, _)| *d == dim).count()
    }
}

impl Surface for Recorder {
    fn position(&self) -> Position {
        self.inner.position()
    }

    fn set_position(&mut self, dim: Dim, value: f32) {
        self.writes.push((dim, value));
        self.inner.set_position(dim, value);
    }

    fn outer_size(&self, include_margin: bool) -> Size {
        self.inner.outer_size(include_margin)
    }

    fn set_length(&mut self, dim: Dim, value: f32) {
        self.inner.set_length(dim, value);
    }

    fn parent_size(&self) -> Size {
        self.inner.parent_size()
    }

    fn parent_offset(&self) -> Position {
        self.inner.parent_offset()
    }
}

fn square(top: f32, left: f32, side: f32, parent: Frame) -> BoxSurface {
    BoxSurface::new(Position::new(top, left), Size::new(side, side), parent)
}

fn parent_200() -> Frame {
    Frame::new(Position::new(0.0, 0.0), Size::new(200.0, 200.0))
}

fn bounded<S: Surface>(surface: S) -> Draggable<S> {
    Draggable::new(surface, DraggableOptions::new().with_bound(true))
}

fn assert_close(a: f32, b: f32) {
    let tol = 1e-3 * (1.0 + b.max(-b));
    assert!(a - b <= tol && b - a <= tol, "expected {b}, got {a}");
}

#[test]
fn lock_modes_follow_the_lock_table() {
    let cases = [
        (LockMode::None, true, true),
        (LockMode::Horizontal, false, true),
        (LockMode::Vertical, true, false),
        (LockMode::Both, false, false),
    ];
    for (mode, horizontal, vertical) in cases {
        let lock = AxisLock::new(mode);
        assert_eq!(lock.move_horizontal, horizontal, "{mode:?}");
        assert_eq!(lock.move_vertical, vertical, "{mode:?}");
        assert_eq!(lock.allows(Dim::Left), horizontal);
        assert_eq!(lock.allows(Dim::Top), vertical);
    }
    assert_eq!(AxisLock::default().mode(), LockMode::None);
}

#[test]
fn pointer_tracker_records_every_move() {
    let mut t = PointerTracker::new();
    assert_eq!(t.move_to(Point::new(1.0, 1.0)), None);

    t.start(Point::new(10.0, 20.0), Point::new(2.0, 3.0));
    assert_eq!(t.move_to(Point::new(15.0, 18.0)), Some(Point::new(5.0, -2.0)));
    assert_eq!(t.move_to(Point::new(15.0, 18.0)), Some(Point::new(0.0, 0.0)));
    assert_eq!(t.session().unwrap().click_offset, Point::new(2.0, 3.0));
    assert_eq!(t.session().unwrap().last, Point::new(15.0, 18.0));

    assert!(t.stop());
    assert!(!t.stop());
    assert!(!t.is_active());
}

#[test]
fn unbounded_drag_follows_the_exact_sum_of_deltas() {
    let mut rng = Lcg::new(7);
    for _ in 0..20 {
        let start = Position::new(10.0, 20.0);
        let mut d = Draggable::new(
            BoxSurface::new(start, Size::new(50.0, 50.0), parent_200()),
            DraggableOptions::new(),
        );
        let mut pointer = Point::new(30.0, 20.0);
        assert!(d.press(pointer));

        let mut sum = Point::default();
        for _ in 0..50 {
            let dx = rng.gen_range_i32(-80, 80) as f32;
            let dy = rng.gen_range_i32(-80, 80) as f32;
            pointer = Point::new(pointer.x + dx, pointer.y + dy);
            sum = Point::new(sum.x + dx, sum.y + dy);
            assert!(d.pointer_move(pointer).is_some());
        }

        let pos = d.surface().position();
        assert_eq!(pos.left, start.left + sum.x);
        assert_eq!(pos.top, start.top + sum.y);
        assert_eq!(d.bound_state(), BoundState::default());
    }
}

#[test]
fn bounded_drag_past_the_origin_snaps_and_sets_sticky_flags() {
    let mut d = bounded(square(0.0, 0.0, 50.0, parent_200()));
    assert!(d.press(Point::new(10.0, 10.0)));

    let pos = d.pointer_move(Point::new(0.0, 0.0)).unwrap();
    assert_eq!(pos, Position::new(0.0, 0.0));
    assert_eq!(
        d.bound_state(),
        BoundState {
            at_bound_left: true,
            at_bound_top: true,
        }
    );
}

#[test]
fn bounded_drag_past_the_far_edge_snaps_to_max() {
    let mut d = bounded(square(0.0, 0.0, 50.0, parent_200()));
    d.press(Point::new(10.0, 10.0));

    let pos = d.pointer_move(Point::new(300.0, 40.0)).unwrap();
    assert_eq!(pos.left, 150.0);
    assert_eq!(pos.top, 30.0);
    assert!(d.bound_state().at_bound_left);
    assert!(!d.bound_state().at_bound_top);
}

#[test]
fn sticky_bound_suppresses_writes_until_the_pointer_reenters() {
    let parent = Frame::new(Position::new(100.0, 50.0), Size::new(200.0, 200.0));
    let mut d = bounded(Recorder::new(square(20.0, 20.0, 50.0, parent)));
    d.lock(LockMode::Vertical);

    // Page position (top 120, left 70): grabbed 10px in. Left window is [60, 210].
    assert!(d.press(Point::new(80.0, 130.0)));

    d.pointer_move(Point::new(40.0, 130.0));
    assert_eq!(d.surface().position().left, 0.0);
    assert!(d.bound_state().at_bound_left);
    assert_eq!(d.surface().writes_for(Dim::Left), 1);

    for x in [30.0, 10.0, -50.0, 59.0] {
        d.pointer_move(Point::new(x, 130.0));
        assert_eq!(d.surface().position().left, 0.0);
        assert!(d.bound_state().at_bound_left);
    }
    assert_eq!(d.surface().writes_for(Dim::Left), 1);

    // Re-entry: tracking resumes from the bound by the pointer delta.
    d.pointer_move(Point::new(70.0, 130.0));
    assert!(!d.bound_state().at_bound_left);
    assert_eq!(d.surface().position().left, 11.0);

    d.pointer_move(Point::new(75.0, 130.0));
    assert_eq!(d.surface().position().left, 16.0);
    assert_eq!(d.surface().writes_for(Dim::Left), 3);
    assert_eq!(d.surface().writes_for(Dim::Top), 0);
}

#[test]
fn bounded_random_walk_stays_inside_and_flags_track_the_window() {
    let mut rng = Lcg::new(42);
    let parent = Frame::new(Position::new(30.0, 40.0), Size::new(300.0, 200.0));
    let mut d = bounded(BoxSurface::new(
        Position::new(10.0, 10.0),
        Size::new(60.0, 40.0),
        parent,
    ));
    let page = d.surface().page_position();
    let press = Point::new(page.left + 15.0, page.top + 5.0);
    assert!(d.press(press));
    let click = d.state();
    assert!(click.dragging);

    for _ in 0..2_000 {
        let pointer = Point::new(
            rng.gen_range_i32(-100, 500) as f32,
            rng.gen_range_i32(-100, 400) as f32,
        );
        let pos = d.pointer_move(pointer).unwrap();
        for dim in Dim::ALL {
            let max = d.max_bound(dim);
            assert!(0.0 <= pos.get(dim) && pos.get(dim) <= max, "{dim:?} = {}", pos.get(dim));

            let near = parent.offset.get(dim) + if dim == Dim::Left { 15.0 } else { 5.0 };
            let outside = pointer.get(dim) < near || pointer.get(dim) > near + max;
            assert_eq!(d.bound_state().get(dim), outside);
        }
    }
}

#[test]
fn axis_locks_never_write_a_locked_coordinate() {
    let cases = [
        (LockMode::None, true, true),
        (LockMode::Horizontal, false, true),
        (LockMode::Vertical, true, false),
        (LockMode::Both, false, false),
    ];
    for (mode, left_moves, top_moves) in cases {
        let mut d = Draggable::new(
            Recorder::new(square(50.0, 50.0, 20.0, parent_200())),
            DraggableOptions::new().with_lock(mode),
        );
        d.press(Point::new(55.0, 55.0));
        d.pointer_move(Point::new(65.0, 70.0));
        d.pointer_move(Point::new(60.0, 40.0));

        let pos = d.surface().position();
        assert_eq!(pos.left != 50.0, left_moves, "{mode:?}");
        assert_eq!(pos.top != 50.0, top_moves, "{mode:?}");
        assert_eq!(d.surface().writes_for(Dim::Left) > 0, left_moves);
        assert_eq!(d.surface().writes_for(Dim::Top) > 0, top_moves);
    }
}

#[test]
fn lock_can_change_mid_session() {
    let mut d = Draggable::new(square(0.0, 0.0, 20.0, parent_200()), DraggableOptions::new());
    d.press(Point::new(5.0, 5.0));
    d.pointer_move(Point::new(15.0, 15.0));
    assert_eq!(d.surface().position(), Position::new(10.0, 10.0));

    d.lock(LockMode::Horizontal);
    d.pointer_move(Point::new(25.0, 25.0));
    assert_eq!(d.surface().position(), Position::new(20.0, 10.0));
    assert_eq!(d.options().lock, LockMode::Horizontal);
}

#[test]
fn on_move_fires_once_per_processed_tick() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_cb = Arc::clone(&calls);
    let mut d = Draggable::new(
        square(0.0, 0.0, 50.0, parent_200()),
        DraggableOptions::new()
            .with_bound(true)
            .with_on_move(Some(move |_: &BoxSurface| {
                calls_cb.fetch_add(1, Ordering::SeqCst);
            })),
    );

    // Idle: nothing processed.
    assert_eq!(d.pointer_move(Point::new(5.0, 5.0)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    d.press(Point::new(10.0, 10.0));
    d.pointer_move(Point::new(0.0, 0.0)); // snap
    d.pointer_move(Point::new(-5.0, -5.0)); // sticky, no write
    d.pointer_move(Point::new(-5.0, -5.0)); // no delta
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    d.release();
    d.pointer_move(Point::new(20.0, 20.0));
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    d.move_element(Dim::Top, 20.0);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn move_element_range_clamps_with_or_without_bound() {
    let mut d = bounded(square(10.0, 10.0, 50.0, parent_200()));
    assert_eq!(d.move_element(Dim::Top, -30.0), Some(0.0));
    assert_eq!(d.move_element(Dim::Left, 500.0), Some(150.0));
    assert_eq!(d.move_element(Dim::Left, 75.0), Some(75.0));
    assert_eq!(d.surface().position(), Position::new(0.0, 75.0));
    // Programmatic moves never touch sticky state.
    assert_eq!(d.bound_state(), BoundState::default());

    assert_eq!(d.move_element(Dim::Top, f32::NAN), None);
    assert_eq!(d.surface().position().top, 0.0);

    let mut free = Draggable::new(square(10.0, 10.0, 50.0, parent_200()), DraggableOptions::new());
    assert_eq!(free.move_element(Dim::Top, -30.0), Some(0.0));
    assert_eq!(free.move_element(Dim::Left, 500.0), Some(150.0));
    assert_eq!(free.surface().position(), Position::new(0.0, 150.0));
    assert_eq!(free.move_to(Position::new(-5.0, 60.0)), Position::new(0.0, 60.0));
}

#[test]
fn move_element_skips_locked_dimensions() {
    let mut d = Draggable::new(
        square(10.0, 10.0, 50.0, parent_200()),
        DraggableOptions::new().with_bound(true).with_lock(LockMode::Horizontal),
    );
    assert_eq!(d.move_element(Dim::Left, 40.0), None);
    assert_eq!(d.move_element(Dim::Top, 40.0), Some(40.0));

    let pos = d.move_to(Position::new(300.0, 0.0));
    assert_eq!(pos, Position::new(150.0, 10.0));
}

#[test]
fn max_bound_includes_margin() {
    let d = bounded(square(0.0, 0.0, 50.0, parent_200()).with_margin(Size::new(10.0, 4.0)));
    assert_eq!(d.max_bound(Dim::Left), 140.0);
    assert_eq!(d.max_bound(Dim::Top), 146.0);
}

#[test]
fn oversized_surface_degrades_to_always_allow() {
    let mut d = bounded(square(0.0, 0.0, 300.0, parent_200()));
    d.press(Point::new(10.0, 10.0));
    let pos = d.pointer_move(Point::new(-20.0, 0.0)).unwrap();
    assert_eq!(pos, Position::new(-10.0, -30.0));
    assert_eq!(d.bound_state(), BoundState::default());

    let mut empty = bounded(square(0.0, 0.0, 0.0, Frame::default()));
    assert_eq!(empty.move_element(Dim::Top, 12.0), Some(12.0));
}

#[test]
fn disable_abandons_the_session_and_enable_starts_fresh() {
    let mut d = bounded(Recorder::new(square(0.0, 0.0, 50.0, parent_200())));
    d.press(Point::new(10.0, 10.0));
    d.pointer_move(Point::new(0.0, 0.0));
    assert!(d.is_dragging());
    let writes = d.surface().writes.len();

    d.disable();
    assert!(!d.is_dragging());
    assert!(!d.is_enabled());
    assert_eq!(d.pointer_move(Point::new(50.0, 50.0)), None);
    assert!(!d.press(Point::new(10.0, 10.0)));
    assert_eq!(d.surface().writes.len(), writes);

    d.enable();
    assert!(d.is_enabled());
    assert!(!d.is_dragging());
    assert_eq!(d.bound_state(), BoundState::default());
    assert!(d.options().bound);

    assert!(d.press(Point::new(10.0, 10.0)));
    assert_eq!(d.pointer_move(Point::new(30.0, 20.0)), Some(Position::new(10.0, 20.0)));
}

#[test]
fn borrowed_surfaces_can_be_dragged() {
    let mut surface = square(0.0, 0.0, 50.0, parent_200());
    {
        let mut d = bounded(&mut surface);
        d.press(Point::new(10.0, 10.0));
        d.pointer_move(Point::new(40.0, 25.0));
    }
    assert_eq!(surface.position, Position::new(15.0, 30.0));
}

#[test]
fn release_without_a_session_is_a_noop() {
    let mut d = bounded(square(0.0, 0.0, 50.0, parent_200()));
    assert!(!d.release());
    d.press(Point::new(1.0, 1.0));
    assert!(d.release());
    assert!(!d.release());
}

#[test]
fn press_records_the_click_offset_in_page_space() {
    let parent = Frame::new(Position::new(40.0, 30.0), Size::new(200.0, 200.0));
    let mut d = bounded(square(5.0, 7.0, 50.0, parent));
    assert!(d.contains(Point::new(37.0, 45.0)));
    assert!(!d.contains(Point::new(10.0, 10.0)));

    d.press(Point::new(40.0, 50.0));
    let state = d.state();
    assert!(state.dragging);
    assert_eq!(state.lock, LockMode::None);
    assert_eq!(state.position, Position::new(5.0, 7.0));
}

#[test]
fn disabled_clamp_always_allows() {
    let mut clamp = BoundClamp::new(false);
    let geometry = AxisGeometry {
        parent_offset: 0.0,
        parent_size: 100.0,
        surface_size: 10.0,
    };
    assert_eq!(clamp.check(Dim::Left, geometry, -50.0, 5.0, -55.0), Clamp::Allow(-55.0));
    assert_eq!(clamp.check(Dim::Left, geometry, -60.0, 5.0, -65.0), Clamp::Allow(-65.0));
    assert_eq!(clamp.state(), BoundState::default());

    clamp.set_enabled(true);
    assert_eq!(clamp.check(Dim::Top, geometry, -1.0, 5.0, -6.0), Clamp::SnapToBound(0.0));
    assert_eq!(clamp.check(Dim::Top, geometry, -2.0, 5.0, -7.0), Clamp::Reject);
    assert_eq!(clamp.check(Dim::Top, geometry, 50.0, 5.0, 45.0), Clamp::Allow(45.0));
    assert_eq!(clamp.check(Dim::Top, geometry, 1.0, 5.0, f32::NAN), Clamp::Reject);
}

#[test]
fn mapping_matches_the_reference_example() {
    let m = ScrollMapping::new(180.0, 36.0, 200.0, 500.0);
    assert!(m.is_scrollable());
    let step = m.weight(60.0);
    assert_close(step, 28.8);
    assert_close(m.content_offset(step), -60.0);
    assert_close(m.content_offset(144.0), -300.0);
    assert_close(m.handle_position(-300.0), 144.0);
    assert_eq!(m.clamp_content_offset(-400.0), -300.0);
    assert_eq!(m.clamp_content_offset(10.0), 0.0);
}

#[test]
fn mapping_round_trips() {
    let mut rng = Lcg::new(99);
    for _ in 0..500 {
        let pane = rng.gen_range_f32(10.0, 500.0);
        let content = pane + rng.gen_range_f32(1.0, 5_000.0);
        let track = rng.gen_range_f32(20.0, 500.0);
        let handle = rng.gen_range_f32(0.0, track - 1.0);
        let m = ScrollMapping::new(track, handle, pane, content);

        let h = rng.gen_range_f32(0.0, m.handle_travel());
        assert_close(m.handle_position(m.content_offset(h)), h);

        let c = -rng.gen_range_f32(0.0, m.content_travel());
        assert_close(m.content_offset(m.handle_position(c)), c);
    }
}

#[test]
fn degenerate_mapping_is_a_noop() {
    let fits = ScrollMapping::new(180.0, 0.0, 200.0, 150.0);
    assert!(!fits.is_scrollable());
    assert_eq!(fits.weight(60.0), 0.0);
    assert_eq!(fits.content_offset(40.0), 0.0);
    assert_eq!(fits.handle_position(-40.0), 0.0);

    let full_track = ScrollMapping::new(100.0, 100.0, 200.0, 500.0);
    assert_eq!(full_track.weight(60.0), 0.0);
    assert_eq!(full_track.content_offset(10.0), 0.0);
}

#[test]
fn handle_length_is_proportional_and_floored() {
    assert_eq!(ScrollMapping::handle_length_for(200.0, 150.0, 0.0, 13.0), 0.0);
    assert_eq!(ScrollMapping::handle_length_for(200.0, 200.0, 0.0, 13.0), 0.0);
    assert_eq!(ScrollMapping::handle_length_for(200.0, 500.0, 0.0, 13.0), 80.0);
    assert_eq!(ScrollMapping::handle_length_for(200.0, 500.0, 20.0, 13.0), 60.0);
    assert_eq!(ScrollMapping::handle_length_for(200.0, 50_000.0, 0.0, 13.0), 13.0);
}

#[test]
fn wheel_delta_normalizes_to_a_direction() {
    assert_eq!(ScrollDirection::from_wheel_delta(3.0), Some(ScrollDirection::Backward));
    assert_eq!(ScrollDirection::from_wheel_delta(-1.0), Some(ScrollDirection::Forward));
    assert_eq!(ScrollDirection::from_wheel_delta(0.0), None);
    assert_eq!(ScrollDirection::from_wheel_delta(f32::NAN), None);
    assert_eq!(ScrollDirection::Forward.sign(), 1.0);
    assert_eq!(Orientation::Vertical.dim(), Dim::Top);
    assert_eq!(Orientation::Horizontal.track_lock(), LockMode::Vertical);
}
