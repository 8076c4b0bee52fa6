//! Feature generators, structures placed into an existing terrain.

use glam::IVec3;

use crate::grid::BlockGrid;
use crate::util::JavaRandom;


pub mod tree;


/// A feature generator that can be placed at a position of a block grid.
pub trait FeatureGenerator {

    /// Try generating this feature at the given position, using the given random
    /// number generator. Returns true if the feature has been placed, false if the
    /// position was not suitable, in which case the grid is left untouched.
    fn generate<G: BlockGrid + ?Sized>(&mut self, grid: &mut G, pos: IVec3, rand: &mut JavaRandom) -> bool;

}
