use crate::models::Position;

pub fn handle() {
    println!("Recognized positions:");
    for p in Position::ALL {
        println!("  {}", p.label());
    }
}
