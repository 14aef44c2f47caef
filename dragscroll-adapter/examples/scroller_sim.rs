// Example: a simulated host loop driving a vertical scroller with wheel, hold and drag input.
use dragscroll::{BoxSurface, Frame, Point, Position, ScrollDirection, ScrollerOptions, Size};
use dragscroll_adapter::ScrollController;

fn main() {
    let track = Frame::new(Position::new(0.0, 300.0), Size::new(12.0, 180.0));
    let handle = BoxSurface::new(Position::default(), Size::new(12.0, 0.0), track);
    let pane = Frame::new(Position::default(), Size::new(280.0, 200.0));
    let content = BoxSurface::new(Position::default(), Size::new(280.0, 500.0), pane);

    let mut s = ScrollController::new(handle, content, ScrollerOptions::new());
    println!("initial: {:?}", s.state());

    // Wheel down twice, then up once.
    for delta in [-1.0, -1.0, 1.0] {
        println!("wheel {delta:+}: content={:?}", s.wheel(delta));
    }

    // Hold the down control for ~200ms, ticking at 60fps.
    s.hold_start(ScrollDirection::Forward, 0);
    let mut now_ms = 0u64;
    while now_ms < 200 {
        now_ms += 16;
        if let Some(off) = s.tick(now_ms) {
            println!("t={now_ms}ms content={off}");
        }
    }
    s.hold_stop();

    // Drag the handle back to the top.
    let handle_top = s.handle_position();
    s.press(Point::new(306.0, handle_top + 5.0));
    println!("drag: content={:?}", s.pointer_move(Point::new(306.0, -50.0)));
    s.release();

    // Content grew: the adapter reports it.
    s.content_mut().size.height = 1_200.0;
    println!("resized handle = {}", s.resize_handle());
    println!("done: {:?}", s.state());
}
