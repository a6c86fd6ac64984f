use ptr_vec::PtrVec;

/// A dummy type which prints its character when dropped.
struct EchoDrop(pub char);

impl Drop for EchoDrop {
    fn drop(&mut self) {
        println!("I was dropped: {}", self.0);
    }
}

fn main() {
    let mut pv = PtrVec::new();
    pv.push(EchoDrop('a'));
    let b_idx = pv.push(EchoDrop('b'));
    pv.push(EchoDrop('c'));
    pv.push(EchoDrop('d'));

    {
        // Removing it from the vector shouldn't drop the value: the box is
        // moved out of the vector into this block.
        println!("--- removing 'b' (nothing should be dropped!) ...");
        let _b = pv.remove(b_idx);

        // But now the box goes out of scope and it should be dropped now.
        println!("--- letting 'b' go out of scope (it should be dropped now!) ...");
    }

    println!("--- erasing 'c' (it should be dropped immediately!) ...");
    pv.erase(1);

    println!("--- resetting 'a' to 'x' ('a' should be dropped!) ...");
    pv.reset_at(0, EchoDrop('x')).unwrap();

    // The vector will be dropped at the end of this function and should drop
    // all elements inside it which haven't been removed yet ('x' and 'd').
    println!("--- Letting 'pv' go out of scope (it should drop 'x' and 'd'!) ...");
}
