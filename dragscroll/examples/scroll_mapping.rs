// Example: the handle <-> content mapping for a 500px list in a 200px pane.
use dragscroll::ScrollMapping;

fn main() {
    let handle = ScrollMapping::handle_length_for(200.0, 500.0, 0.0, 13.0);
    let m = ScrollMapping::new(180.0, handle, 200.0, 500.0);
    println!("handle length = {handle}, handle travel = {}", m.handle_travel());

    let step = m.weight(60.0);
    println!("a 60px content step is {step}px of handle travel");

    let mut pos = 0.0;
    while pos <= m.handle_travel() {
        println!("handle={pos:>7.2} content={:>8.2}", m.content_offset(pos));
        pos += step;
    }

    let fits = ScrollMapping::new(180.0, 0.0, 200.0, 150.0);
    println!("fits: scrollable={} weight={}", fits.is_scrollable(), fits.weight(60.0));
}
