use ptr_vec::PtrVec;


trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

struct Circle(f64);
struct Rect(f64, f64);

impl Shape for Circle {
    fn name(&self) -> &str {
        "circle"
    }
    fn area(&self) -> f64 {
        3.14159 * self.0 * self.0
    }
}

impl Shape for Rect {
    fn name(&self) -> &str {
        "rect"
    }
    fn area(&self) -> f64 {
        self.0 * self.1
    }
}

fn main() {
    let mut shapes: PtrVec<dyn Shape> = PtrVec::new();
    shapes.push_boxed(Box::new(Circle(1.0)));
    shapes.push_boxed(Box::new(Rect(2.0, 3.0)));
    shapes.emplace_back(|| Box::new(Circle(0.5)));
    shapes.insert_boxed(0, Box::new(Rect(1.0, 1.0)));

    for (i, s) in shapes.iter().enumerate() {
        println!("{} -> {} with area {:.2}", i, s.name(), s.area());
    }

    // Replace the first circle with a larger rectangle.
    shapes.reset_boxed_at(1, Box::new(Rect(4.0, 4.0))).unwrap();

    let total: f64 = shapes.iter().map(|s| s.area()).sum();
    println!("--- after reset_boxed_at(1):");
    println!("total area: {:.2}", total);
    println!("out of range: {}", shapes.at(10).err().unwrap());
}
