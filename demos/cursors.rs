use ptr_vec::{Cursor, PtrVec};


fn main() {
    let mut pv = PtrVec::from([3, 1, 4, 1, 5, 9, 2, 6]);

    let begin = pv.cursor(0);
    let end = pv.cursor(pv.len());
    println!("distance begin -> end: {}", end - begin);

    // Walk backwards from the end.
    let mut c = end;
    while c != begin {
        c.move_prev();
        print!("{:?} ", c.get());
    }
    println!();

    // Double every element at an even index.
    let len = pv.len();
    let mut c = pv.cursor_mut(0);
    while c.index() < len {
        if let Some(x) = c.get_mut() {
            *x *= 2;
        }
        c += usize::min(2, len - c.index());
    }

    let c: Cursor<_> = c.into();
    println!("stopped at {:?}, looking back: {:?}", c, c.peek(-1));
    println!("{:?}", pv);
}
