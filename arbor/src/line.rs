//! Rasterization of straight block lines, used to check and place tree branches.

use glam::IVec3;

use crate::block::BlockState;
use crate::grid::BlockGrid;


/// How the interpolated coordinates of a line are rounded to block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round toward negative infinity, used when checking lines.
    Floor,
    /// Round to the nearest block, used when placing lines.
    Nearest,
}

impl Rounding {

    #[inline]
    fn offset(self) -> f64 {
        match self {
            Rounding::Floor => 0.0,
            Rounding::Nearest => 0.5,
        }
    }

}


/// Iterator over all blocks of a straight line between two points, both included. The
/// line steps one block at a time along its major axis, the axis with the largest
/// absolute delta, the earliest axis in X, Y, Z order wins on ties. A line with zero
/// delta yields no block.
#[derive(Debug, Clone, Default)]
pub struct BlockLineIter {
    from: IVec3,
    major_axis: usize,
    second_axis: usize,
    third_axis: usize,
    second_ratio: f64,
    third_ratio: f64,
    offset: f64,
    major_inc: i32,
    major_max: i32,
    major: i32,
}

impl BlockLineIter {

    pub fn new(from: IVec3, to: IVec3, rounding: Rounding) -> Self {

        let delta = to - from;

        let mut major_axis = 0;
        for axis in 1..3 {
            if delta[axis].abs() > delta[major_axis].abs() {
                major_axis = axis;
            }
        }

        let major_delta = delta[major_axis];
        if major_delta == 0 {
            return Self::default();
        }

        let second_axis = (major_axis + 1) % 3;
        let third_axis = (major_axis + 2) % 3;

        let major_inc = major_delta.signum();

        Self {
            from,
            major_axis,
            second_axis,
            third_axis,
            second_ratio: delta[second_axis] as f64 / major_delta as f64,
            third_ratio: delta[third_axis] as f64 / major_delta as f64,
            offset: rounding.offset(),
            major_inc,
            major_max: major_delta + major_inc,
            major: 0,
        }

    }

    /// Index of the major axis, 0 for X, 1 for Y and 2 for Z.
    #[inline]
    pub fn major_axis(&self) -> usize {
        self.major_axis
    }

}

impl Iterator for BlockLineIter {

    type Item = IVec3;

    fn next(&mut self) -> Option<Self::Item> {
        if self.major == self.major_max {
            None
        } else {
            let mut pos = IVec3::ZERO;
            let major = self.major as f64;
            pos[self.major_axis] = self.from[self.major_axis] + self.major;
            pos[self.second_axis] = (self.from[self.second_axis] as f64 + major * self.second_ratio + self.offset).floor() as i32;
            pos[self.third_axis] = (self.from[self.third_axis] as f64 + major * self.third_ratio + self.offset).floor() as i32;
            self.major += self.major_inc;
            Some(pos)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.major_max - self.major).unsigned_abs() as usize;
        (remaining, Some(remaining))
    }

}

impl ExactSizeIterator for BlockLineIter {}


/// Check a line of blocks, this function returns the distance along the major axis to
/// the first block that a tree cannot grow through. None is returned if the line is
/// fully clear, or if it has no block at all.
pub fn check_line<G: BlockGrid + ?Sized>(grid: &G, from: IVec3, to: IVec3) -> Option<i32> {
    BlockLineIter::new(from, to, Rounding::Floor)
        .position(|pos| !grid.is_replaceable(pos))
        .map(|distance| distance as i32)
}

/// Place a line of the given block, only replacing air and leaves.
pub fn place_line<G: BlockGrid + ?Sized>(grid: &mut G, from: IVec3, to: IVec3, block: BlockState) {
    for pos in BlockLineIter::new(from, to, Rounding::Nearest) {
        if grid.is_replaceable(pos) {
            grid.set_block(pos, block);
        }
    }
}
