// Example: attach-once controllers keyed by an opaque element id.
use dragscroll::{BoxSurface, Frame, Position, ScrollDirection, ScrollerOptions, Size};
use dragscroll_adapter::{Registry, ScrollController};

fn scroller(content_len: f32) -> ScrollController<BoxSurface, BoxSurface> {
    let track = Frame::new(Position::default(), Size::new(12.0, 180.0));
    let handle = BoxSurface::new(Position::default(), Size::new(12.0, 0.0), track);
    let pane = Frame::new(Position::default(), Size::new(280.0, 200.0));
    let content = BoxSurface::new(Position::default(), Size::new(280.0, content_len), pane);
    ScrollController::new(handle, content, ScrollerOptions::new())
}

fn main() {
    let mut registry = Registry::<&'static str, _>::new();

    // Configuring the same element twice reuses the first controller.
    for id in ["inbox", "sent", "inbox"] {
        let s = registry.get_or_insert_with(id, || scroller(800.0));
        s.scroll_by(ScrollDirection::Forward);
        println!("{id}: content={}", s.content_offset());
    }
    println!("controllers: {}", registry.len());

    if let Some(s) = registry.remove(&"sent") {
        println!("detached sent at {:?}", s.state());
    }
}
