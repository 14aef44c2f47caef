// Example: drag a bounded box around its parent and watch the sticky edge behaviour.
use dragscroll::{BoxSurface, Draggable, DraggableOptions, Frame, Point, Position, Size};

fn main() {
    let parent = Frame::new(Position::new(0.0, 0.0), Size::new(200.0, 200.0));
    let surface = BoxSurface::new(Position::new(20.0, 20.0), Size::new(50.0, 50.0), parent);
    let mut d = Draggable::new(
        surface,
        DraggableOptions::new()
            .with_bound(true)
            .with_on_move(Some(|s: &BoxSurface| {
                println!("  on_move: {:?}", s.position);
            })),
    );

    // Grab the box 10px in from its top-left corner.
    d.press(Point::new(30.0, 30.0));

    for pointer in [
        Point::new(60.0, 50.0),
        Point::new(-40.0, 50.0), // past the left edge: snaps to 0
        Point::new(-80.0, 50.0), // still outside: no write
        Point::new(25.0, 50.0),  // back inside: tracking resumes
    ] {
        let pos = d.pointer_move(pointer);
        println!("pointer={pointer:?} pos={pos:?} sticky={:?}", d.bound_state());
    }

    d.release();
    println!("done: {:?}", d.state());
}
