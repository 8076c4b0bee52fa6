//! Big tree generator.
//!
//! A big tree is made of a main trunk, a set of leaf nodes sampled on a roughly
//! spherical crown, a cluster of leaves around each node and a branch linking each
//! node back to the trunk. Generation runs in a fixed order: site validation, leaf
//! node sampling, leaves, trunk and finally branches. Given the same seed, origin and
//! grid content, the same blocks are always written.

use std::f64::consts::PI;

use glam::IVec3;
use tracing::{instrument, trace};

use crate::block::{self, BlockState};
use crate::grid::BlockGrid;
use crate::line::{check_line, place_line};
use crate::util::JavaRandom;

use super::FeatureGenerator;


/// Minimum height limit of a tree whose growth is shortened by an obstruction.
pub const MIN_OBSTRUCTED_HEIGHT: i32 = 6;

/// Height limit added to the random part of the height.
const BASE_HEIGHT_LIMIT: i32 = 5;
/// Base number of leaf nodes sampled per layer.
const LAYER_NODES_BASE: f64 = 1.382;
/// Minimum distance factor of a leaf node to the trunk.
const NODE_LENGTH_MIN: f64 = 0.328;
/// Fraction of the height limit under which no leaf node is sampled.
const LAYER_MIN_FACTOR: f64 = 0.3;
/// Layer size returned for layers without leaf node.
const NO_LAYER_SIZE: f32 = -1.618;
/// Fraction of the height limit under which branches are not placed.
const BRANCH_MIN_FACTOR: f64 = 0.2;
/// Added to a leaf layer radius to get the half side of the scanned square.
const LEAF_LAYER_MARGIN: f64 = 0.618;
/// Upper bound of the leaf nodes capacity reserved before sampling.
const MAX_NODES_RESERVE: usize = 1024;


/// Tunable shape parameters of a big tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeParams {
    /// Exclusive upper bound of the random part of the height limit.
    pub height_limit_limit: i32,
    /// If set, the height limit is not randomized.
    pub fixed_height_limit: Option<i32>,
    /// Fraction of the height limit used for the trunk height.
    pub height_attenuation: f64,
    /// Never read by the generator, kept for compatibility with existing presets.
    pub branch_density: f64,
    /// How steeply branches go down toward the trunk.
    pub branch_slope: f64,
    /// Horizontal spread multiplier of leaf nodes.
    pub scale_width: f64,
    /// Multiplier for the number of leaf nodes sampled per layer.
    pub leaf_density: f64,
    /// Width of the trunk, 2 for a 2x2 trunk, anything else is a single column.
    pub trunk_size: i32,
    /// Vertical span of each leaf cluster.
    pub leaf_distance_limit: i32,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            height_limit_limit: 12,
            fixed_height_limit: None,
            height_attenuation: 0.618,
            branch_density: 1.0,
            branch_slope: 0.381,
            scale_width: 1.0,
            leaf_density: 1.0,
            trunk_size: 1,
            leaf_distance_limit: 4,
        }
    }
}

impl TreeParams {

    /// Rescale the height, width and leaf density of the tree.
    pub fn set_scale(&mut self, height_factor: f64, width_factor: f64, density: f64) {
        self.height_limit_limit = (height_factor * 12.0) as i32;
        if height_factor > 0.5 {
            self.leaf_distance_limit = 5;
        }
        self.scale_width = width_factor;
        self.leaf_density = density;
    }

}


/// Leaf color variants of autumn leaves, the discriminant is the block metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutumnLeaves {
    Brown = 0,
    Orange = 1,
    Purple = 2,
    Yellow = 3,
}

/// The blocks placed by a tree generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePalette {
    pub wood: BlockState,
    pub leaf: BlockState,
}

impl TreePalette {

    #[inline]
    pub const fn new(wood: BlockState, leaf: BlockState) -> Self {
        Self { wood, leaf }
    }

    /// Oak log and leaves of the reference block ids.
    #[inline]
    pub const fn oak() -> Self {
        Self::new(BlockState::new(block::LOG, 0), BlockState::new(block::LEAVES, 0))
    }

    /// Oak log with autumn leaves of the given color.
    #[inline]
    pub const fn autumn(leaves: AutumnLeaves) -> Self {
        Self::new(BlockState::new(block::LOG, 0), BlockState::new(block::AUTUMN_LEAVES, leaves as u8))
    }

}


/// A leaf node of a big tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafNode {
    /// Bottom center of the leaves cluster.
    pub pos: IVec3,
    /// Y position on the trunk where the branch to this node starts.
    pub base_y: i32,
}

/// The resolved shape of a successfully placed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeShape {
    /// The height limit, possibly shortened by an obstruction.
    pub height_limit: i32,
    /// The trunk height, always less than the height limit.
    pub height: i32,
    /// All leaf nodes, the first one is always the apex of the crown.
    pub leaf_nodes: Vec<LeafNode>,
}


/// State of a single generation, never shared between two generations.
struct GeneratorState {
    origin: IVec3,
    height_limit: i32,
    height: i32,
    leaf_nodes: Vec<LeafNode>,
    rand: JavaRandom,
}


/// Generator for big trees.
#[derive(Debug, Clone)]
pub struct BigTreeGenerator {
    params: TreeParams,
    palette: TreePalette,
}

impl BigTreeGenerator {

    #[inline]
    pub fn new(palette: TreePalette) -> Self {
        Self::with_params(palette, TreeParams::default())
    }

    /// Create a new big tree generator for natural generation, it has larger leaf
    /// clusters than the default one.
    #[inline]
    pub fn new_natural(palette: TreePalette) -> Self {
        let mut ret = Self::new(palette);
        ret.params.leaf_distance_limit = 5;
        ret
    }

    #[inline]
    pub fn with_params(palette: TreePalette, params: TreeParams) -> Self {
        Self { params, palette }
    }

    #[inline]
    pub fn with_trunk_size(mut self, trunk_size: i32) -> Self {
        self.params.trunk_size = trunk_size;
        self
    }

    #[inline]
    pub fn with_fixed_height_limit(mut self, height_limit: i32) -> Self {
        self.params.fixed_height_limit = Some(height_limit);
        self
    }

    #[inline]
    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    #[inline]
    pub fn params_mut(&mut self) -> &mut TreeParams {
        &mut self.params
    }

    #[inline]
    pub fn palette(&self) -> &TreePalette {
        &self.palette
    }

    /// See [`TreeParams::set_scale`].
    #[inline]
    pub fn set_scale(&mut self, height_factor: f64, width_factor: f64, density: f64) {
        self.params.set_scale(height_factor, width_factor, density);
    }

    /// Generate a tree with its base at the given origin. Returns false without
    /// touching the grid if the site is not suitable.
    #[inline]
    pub fn generate<G: BlockGrid + ?Sized>(&self, grid: &mut G, seed: u64, origin: IVec3) -> bool {
        self.grow(grid, seed, origin).is_some()
    }

    /// Generate a tree with its base at the given origin and return its shape, none is
    /// returned without touching the grid if the site is not suitable.
    #[instrument(level = "trace", skip_all)]
    pub fn grow<G: BlockGrid + ?Sized>(&self, grid: &mut G, seed: u64, origin: IVec3) -> Option<TreeShape> {

        let mut rand = JavaRandom::new(seed as i64);
        let height_limit = match self.params.fixed_height_limit {
            Some(height_limit) => height_limit,
            None => BASE_HEIGHT_LIMIT + rand.next_int_bounded(self.params.height_limit_limit.max(1)),
        };

        let height_limit = self.check_site(grid, origin, height_limit)?;

        let mut height = (height_limit as f64 * self.params.height_attenuation) as i32;
        if height >= height_limit {
            height = height_limit - 1;
        }

        let mut state = GeneratorState {
            origin,
            height_limit,
            height,
            leaf_nodes: Vec::new(),
            rand,
        };

        self.sample_leaf_nodes(grid, &mut state);
        self.place_leaves(grid, &state);
        self.place_trunk(grid, &state);
        self.place_branches(grid, &state);

        trace!("placed big tree at {origin}, height limit: {height_limit}, leaf nodes: {}", state.leaf_nodes.len());

        Some(TreeShape {
            height_limit: state.height_limit,
            height: state.height,
            leaf_nodes: state.leaf_nodes,
        })

    }

    /// Check that the tree can be planted at the given origin and return the height
    /// limit, shortened if an obstruction is found above the origin.
    fn check_site<G: BlockGrid + ?Sized>(&self, grid: &G, origin: IVec3, height_limit: i32) -> Option<i32> {

        if !grid.is_plantable_surface(origin - IVec3::Y) {
            trace!("rejected big tree at {origin}: not plantable");
            return None;
        }

        match check_line(grid, origin, origin + IVec3::new(0, height_limit - 1, 0)) {
            None => Some(height_limit),
            Some(distance) if distance < MIN_OBSTRUCTED_HEIGHT => {
                trace!("rejected big tree at {origin}: obstructed at {distance}");
                None
            }
            Some(distance) => Some(distance),
        }

    }

    /// Sample all leaf nodes, the apex node is always the first one.
    fn sample_leaf_nodes<G: BlockGrid + ?Sized>(&self, grid: &G, state: &mut GeneratorState) {

        let params = &self.params;
        let origin = state.origin;
        let height_limit = state.height_limit;
        let trunk_top_y = origin.y + state.height;

        let nodes_per_layer = ((LAYER_NODES_BASE + (params.leaf_density * height_limit as f64 / 13.0).powi(2)) as i32).max(1);
        state.leaf_nodes.reserve((nodes_per_layer as usize).saturating_mul(height_limit.max(0) as usize).min(MAX_NODES_RESERVE));

        let mut leaf_y = origin.y + height_limit - params.leaf_distance_limit;
        let mut leaf_offset = leaf_y - origin.y;

        state.leaf_nodes.push(LeafNode {
            pos: IVec3::new(origin.x, leaf_y, origin.z),
            base_y: trunk_top_y,
        });

        // The first sampled layer is just under the apex while its size is computed
        // from the apex offset, every layer is shifted down by one.
        leaf_y -= 1;

        while leaf_offset >= 0 {

            let size = layer_size(leaf_offset, height_limit);
            if size >= 0.0 {

                for _ in 0..nodes_per_layer {

                    let length = params.scale_width * size as f64 * (state.rand.next_float() as f64 + NODE_LENGTH_MIN);
                    let angle = state.rand.next_float() as f64 * 2.0 * PI;

                    let node_x = (length * angle.sin() + origin.x as f64 + 0.5).floor() as i32;
                    let node_z = (length * angle.cos() + origin.z as f64 + 0.5).floor() as i32;
                    let node_pos = IVec3::new(node_x, leaf_y, node_z);

                    // The leaves cluster needs a clear column.
                    let cluster_top = node_pos + IVec3::new(0, params.leaf_distance_limit, 0);
                    if check_line(grid, node_pos, cluster_top).is_some() {
                        continue;
                    }

                    // The branch starts lower on the trunk the further the node is from
                    // it, but never above the trunk top.
                    let horiz_dist = (((origin.x - node_x) as f64).powi(2) + ((origin.z - node_z) as f64).powi(2)).sqrt();
                    let start_y = node_pos.y as f64 - horiz_dist * params.branch_slope;
                    let base_y = if start_y > trunk_top_y as f64 {
                        trunk_top_y
                    } else {
                        start_y as i32
                    };

                    if check_line(grid, IVec3::new(origin.x, base_y, origin.z), node_pos).is_none() {
                        state.leaf_nodes.push(LeafNode {
                            pos: node_pos,
                            base_y,
                        });
                    }

                }

            }

            leaf_y -= 1;
            leaf_offset -= 1;

        }

    }

    /// Place the leaves cluster of every leaf node.
    fn place_leaves<G: BlockGrid + ?Sized>(&self, grid: &mut G, state: &GeneratorState) {
        for node in &state.leaf_nodes {
            for dy in 0..self.params.leaf_distance_limit {
                let size = leaf_size(dy, self.params.leaf_distance_limit);
                self.place_leaf_layer(grid, node.pos + IVec3::new(0, dy, 0), size);
            }
        }
    }

    /// Place a single horizontal disc of leaves of the given radius.
    fn place_leaf_layer<G: BlockGrid + ?Sized>(&self, grid: &mut G, center: IVec3, radius: f32) {

        let block_radius = (radius as f64 + LEAF_LAYER_MARGIN) as i32;

        for dx in -block_radius..=block_radius {
            for dz in -block_radius..=block_radius {
                let dist = ((dx.abs() as f64 + 0.5).powi(2) + (dz.abs() as f64 + 0.5).powi(2)).sqrt();
                if dist <= radius as f64 {
                    let pos = center + IVec3::new(dx, 0, dz);
                    if grid.is_replaceable(pos) {
                        grid.set_block(pos, self.palette.leaf);
                    }
                }
            }
        }

    }

    /// Place the trunk, a single column or a 2x2 square of columns.
    fn place_trunk<G: BlockGrid + ?Sized>(&self, grid: &mut G, state: &GeneratorState) {

        let from = state.origin;
        let to = from + IVec3::new(0, state.height, 0);
        place_line(grid, from, to, self.palette.wood);

        if self.params.trunk_size == 2 {
            for offset in [IVec3::X, IVec3::X + IVec3::Z, IVec3::Z] {
                place_line(grid, from + offset, to + offset, self.palette.wood);
            }
        }

    }

    /// Place a branch from the trunk to every leaf node high enough.
    fn place_branches<G: BlockGrid + ?Sized>(&self, grid: &mut G, state: &GeneratorState) {

        let min_offset = state.height_limit as f64 * BRANCH_MIN_FACTOR;

        for node in &state.leaf_nodes {
            if (node.base_y - state.origin.y) as f64 >= min_offset {
                let from = IVec3::new(state.origin.x, node.base_y, state.origin.z);
                place_line(grid, from, node.pos, self.palette.wood);
            }
        }

    }

}

impl FeatureGenerator for BigTreeGenerator {

    fn generate<G: BlockGrid + ?Sized>(&mut self, grid: &mut G, pos: IVec3, rand: &mut JavaRandom) -> bool {
        let seed = rand.next_long() as u64;
        self.grow(grid, seed, pos).is_some()
    }

}


/// Compute the radius of the crown at the given offset from the tree base, negative
/// if no leaf node should be sampled at this offset.
fn layer_size(offset: i32, height_limit: i32) -> f32 {

    if (offset as f64) < height_limit as f64 * LAYER_MIN_FACTOR {
        return NO_LAYER_SIZE;
    }

    let half_height = height_limit as f32 / 2.0;
    let center_dist = half_height - offset as f32;

    let size = if center_dist == 0.0 {
        half_height
    } else if center_dist.abs() >= half_height {
        0.0
    } else {
        ((half_height.abs() as f64).powi(2) - (center_dist.abs() as f64).powi(2)).sqrt() as f32
    };

    size * 0.5

}

/// Compute the radius of the leaves layer at the given offset from its leaf node.
fn leaf_size(offset: i32, leaf_distance_limit: i32) -> f32 {
    if offset < 0 || offset >= leaf_distance_limit {
        -1.0
    } else if offset == 0 || offset == leaf_distance_limit - 1 {
        2.0
    } else {
        3.0
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::block::{BlockTable, VoxelKind};
    use crate::grid::VoxelGrid;

    const ORIGIN: IVec3 = IVec3::new(0, 4, 0);

    /// A flat terrain of stone covered by grass, the tree origin is just above grass.
    fn terrain() -> VoxelGrid {
        let mut grid = VoxelGrid::new(IVec3::new(-16, 0, -16), IVec3::new(32, 40, 32), BlockTable::classic()).unwrap();
        grid.fill(IVec3::new(-16, 0, -16), IVec3::new(32, 3, 32), block::STONE, 0);
        grid.fill(IVec3::new(-16, 3, -16), IVec3::new(32, 1, 32), block::GRASS, 0);
        grid
    }

    fn oak() -> BigTreeGenerator {
        BigTreeGenerator::new(TreePalette::oak())
    }

    #[test]
    fn layer_and_leaf_sizes() {

        assert_eq!(layer_size(2, 10), NO_LAYER_SIZE);
        assert_eq!(layer_size(5, 10), 2.5);
        assert_eq!(layer_size(10, 10), 0.0);
        assert_eq!(layer_size(8, 10), 2.0);

        assert_eq!(leaf_size(-1, 4), -1.0);
        assert_eq!(leaf_size(0, 4), 2.0);
        assert_eq!(leaf_size(1, 4), 3.0);
        assert_eq!(leaf_size(2, 4), 3.0);
        assert_eq!(leaf_size(3, 4), 2.0);
        assert_eq!(leaf_size(4, 4), -1.0);

    }

    #[test]
    fn set_scale() {

        let mut params = TreeParams::default();
        params.set_scale(0.5, 0.75, 2.0);
        assert_eq!(params.height_limit_limit, 6);
        assert_eq!(params.leaf_distance_limit, 4);
        assert_eq!(params.scale_width, 0.75);
        assert_eq!(params.leaf_density, 2.0);

        params.set_scale(1.0, 1.0, 1.0);
        assert_eq!(params.height_limit_limit, 12);
        assert_eq!(params.leaf_distance_limit, 5);

    }

    #[test]
    fn success() {

        let generator = oak();

        for seed in 0..32 {

            let mut grid = terrain();
            let shape = generator.grow(&mut grid, seed, ORIGIN).expect("clear site");

            assert!((BASE_HEIGHT_LIMIT..BASE_HEIGHT_LIMIT + 12).contains(&shape.height_limit));
            assert!(shape.height < shape.height_limit);

            // Apex node.
            let apex = shape.leaf_nodes[0];
            assert_eq!(apex.pos, IVec3::new(ORIGIN.x, ORIGIN.y + shape.height_limit - 4, ORIGIN.z));
            assert_eq!(apex.base_y, ORIGIN.y + shape.height);

            for node in &shape.leaf_nodes[1..] {
                assert!(node.base_y <= node.pos.y, "seed {seed}: {node:?}");
            }

            for y in ORIGIN.y..=ORIGIN.y + shape.height {
                assert_eq!(grid.block(IVec3::new(0, y, 0)), Some((block::LOG, 0)), "seed {seed}: trunk at {y}");
            }

            assert_eq!(grid.block(apex.pos + IVec3::X), Some((block::LEAVES, 0)), "seed {seed}");
            assert_eq!(grid.block(apex.pos - IVec3::Z), Some((block::LEAVES, 0)), "seed {seed}");

            // Ground is untouched.
            assert_eq!(grid.count(block::GRASS), 32 * 32);

        }

    }

    #[test]
    fn vertical_bounds() {

        for generator in [oak(), oak().with_trunk_size(2), BigTreeGenerator::new_natural(TreePalette::oak())] {

            let leaf_distance_limit = generator.params().leaf_distance_limit;

            for seed in 0..32 {

                let mut grid = terrain();
                let before = grid.clone();
                let shape = generator.grow(&mut grid, seed, ORIGIN).expect("clear site");
                let top_y = ORIGIN.y + shape.height_limit + leaf_distance_limit;

                for node in &shape.leaf_nodes[1..] {
                    assert!(node.base_y >= ORIGIN.y, "seed {seed}: {node:?}");
                }

                let diff = grid.diff(&before).unwrap();
                assert!(!diff.is_empty());
                for pos in diff {
                    assert!((ORIGIN.y..=top_y).contains(&pos.y), "seed {seed}: wrote at {pos}");
                }

            }

        }

    }

    #[test]
    fn dense_crown() {

        let mut generator = oak();
        generator.params_mut().leaf_density = 6.0;

        let mut grid = terrain();
        let dense = generator.grow(&mut grid, 7, ORIGIN).expect("clear site");
        let mut grid = terrain();
        let sparse = oak().grow(&mut grid, 7, ORIGIN).expect("clear site");

        assert_eq!(dense.height_limit, sparse.height_limit);
        assert!(dense.leaf_nodes.len() > sparse.leaf_nodes.len());

    }

    #[test]
    fn deterministic() {

        let generator = BigTreeGenerator::new_natural(TreePalette::autumn(AutumnLeaves::Orange));

        for seed in [0, 1, 1234, u64::MAX] {
            let mut a = terrain();
            let mut b = terrain();
            let shape_a = generator.grow(&mut a, seed, ORIGIN);
            let shape_b = generator.grow(&mut b, seed, ORIGIN);
            assert_eq!(shape_a, shape_b);
            assert_eq!(a, b);
            assert!(a.count(block::AUTUMN_LEAVES) > 0);
            assert_eq!(a.count(block::LEAVES), 0);
        }

    }

    #[test]
    fn no_overwrite() {

        let generator = oak();

        for seed in 0..16 {

            let mut grid = terrain();
            grid.fill(IVec3::new(2, 8, 1), IVec3::new(1, 8, 1), block::COBBLESTONE, 0);
            grid.fill(IVec3::new(-3, 10, -2), IVec3::new(2, 2, 2), block::COBBLESTONE, 0);
            grid.set_block_and_metadata(IVec3::new(0, 12, 2), block::COBBLESTONE, 0);

            let before = grid.clone();
            generator.generate(&mut grid, seed, ORIGIN);

            for pos in grid.diff(&before).unwrap() {
                assert!(before.kind(pos).is_replaceable(), "seed {seed}: overwrote {pos}");
            }

            for pos in before.positions() {
                if before.kind(pos) == VoxelKind::Solid {
                    assert_eq!(grid.block(pos), before.block(pos));
                }
            }

        }

    }

    #[test]
    fn rejected_under_ceiling() {

        let generator = oak();
        let mut grid = terrain();
        grid.fill(IVec3::new(-16, ORIGIN.y + 3, -16), IVec3::new(32, 1, 32), block::STONE, 0);
        let before = grid.clone();

        for _ in 0..2 {
            assert!(!generator.generate(&mut grid, 77, ORIGIN));
            assert!(grid.diff(&before).unwrap().is_empty());
        }

    }

    #[test]
    fn rejected_not_plantable() {

        let generator = oak();
        let mut grid = terrain();
        grid.set_block_and_metadata(ORIGIN - IVec3::Y, block::STONE, 0);
        let before = grid.clone();

        assert!(!generator.generate(&mut grid, 3, ORIGIN));
        assert_eq!(grid, before);

    }

    #[test]
    fn shortened_by_obstruction() {

        let generator = oak().with_fixed_height_limit(14);
        let mut grid = terrain();
        grid.fill(IVec3::new(-16, ORIGIN.y + 8, -16), IVec3::new(32, 1, 32), block::STONE, 0);

        let shape = generator.grow(&mut grid, 5, ORIGIN).expect("obstruction far enough");
        assert_eq!(shape.height_limit, 8);
        assert_eq!(shape.height, 4);
        assert_eq!(shape.leaf_nodes[0].pos, ORIGIN + IVec3::new(0, 4, 0));

        // Just under the minimum.
        let generator = oak().with_fixed_height_limit(14);
        let mut grid = terrain();
        grid.fill(IVec3::new(-16, ORIGIN.y + 5, -16), IVec3::new(32, 1, 32), block::STONE, 0);
        assert_eq!(generator.grow(&mut grid, 5, ORIGIN), None);

    }

    #[test]
    fn double_trunk() {

        let generator = oak().with_trunk_size(2);

        for seed in 0..8 {

            let mut grid = terrain();
            let shape = generator.grow(&mut grid, seed, ORIGIN).expect("clear site");

            for dx in -1..=2 {
                for dz in -1..=2 {
                    let pos = ORIGIN + IVec3::new(dx, 0, dz);
                    let expected = (0..=1).contains(&dx) && (0..=1).contains(&dz);
                    assert_eq!(grid.block(pos) == Some((block::LOG, 0)), expected, "seed {seed}: {pos}");
                }
            }

            for offset in [IVec3::ZERO, IVec3::X, IVec3::X + IVec3::Z, IVec3::Z] {
                for y in 0..=shape.height {
                    let pos = ORIGIN + offset + IVec3::new(0, y, 0);
                    assert_eq!(grid.block(pos), Some((block::LOG, 0)), "seed {seed}: {pos}");
                }
            }

        }

    }

    #[test]
    fn feature_generator_seed() {

        let mut generator = oak();
        let mut rand = JavaRandom::new(99);
        let mut expected_rand = rand.clone();
        let seed = expected_rand.next_long() as u64;

        let mut a = terrain();
        let mut b = terrain();
        assert!(FeatureGenerator::generate(&mut generator, &mut a, ORIGIN, &mut rand));
        assert!(generator.generate(&mut b, seed, ORIGIN));
        assert_eq!(a, b);
        assert_eq!(rand.next_long(), expected_rand.next_long());

    }

}
