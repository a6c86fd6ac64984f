//! This is just a dummy library to check the assembly output of some
//! functions.

use ptr_vec::PtrVec;

pub trait Shape {
    fn area(&self) -> u32;
}

pub fn index_u32(pv: &PtrVec<u32>, index: usize) -> u32 {
    pv[index]
}

pub fn at_u32(pv: &PtrVec<u32>, index: usize) -> Option<u32> {
    pv.at(index).ok().copied()
}

pub fn push_u32(pv: &mut PtrVec<u32>, val: u32) -> usize {
    pv.push(val)
}

pub fn count_u32(pv: &PtrVec<u32>) -> usize {
    pv.iter().count()
}

pub fn sum_u32(pv: &PtrVec<u32>) -> u32 {
    pv.iter().sum()
}

pub fn index_dyn(pv: &PtrVec<dyn Shape>, index: usize) -> u32 {
    pv[index].area()
}

pub fn push_dyn(pv: &mut PtrVec<dyn Shape>, shape: Box<dyn Shape>) -> usize {
    pv.push_boxed(shape)
}
