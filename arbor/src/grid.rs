//! The block grid contract consumed by generators, and a bounded in-memory grid that
//! implements it.

use std::io::{self, Write};

use glam::IVec3;
use thiserror::Error;

use crate::block::{BlockState, BlockTable, VoxelKind, AIR};


/// The only view of the world a generator needs. Implementors are expected to be
/// cheap to query, generators read the same positions many times.
pub trait BlockGrid {

    /// Classify the block at the given position. Positions that the grid cannot
    /// address must be reported as [`VoxelKind::Solid`] so that nothing grows into them.
    fn kind(&self, pos: IVec3) -> VoxelKind;

    /// Unconditionally set the block at the given position. Writes to positions that
    /// the grid cannot address are ignored.
    fn set_block(&mut self, pos: IVec3, block: BlockState);

    /// Return true if a tree can be planted on the block at the given position.
    fn is_plantable_surface(&self, pos: IVec3) -> bool;

    /// Return true if a tree can grow through the block at the given position.
    #[inline]
    fn is_replaceable(&self, pos: IVec3) -> bool {
        self.kind(pos).is_replaceable()
    }

}


/// A box of blocks starting at a world origin, storing block ids and 4-bit metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    /// World position of the minimum corner.
    origin: IVec3,
    /// Number of blocks on each axis.
    size: IVec3,
    /// The numeric identifier of the block.
    block: Vec<u8>,
    /// Four bit metadata for each block.
    metadata: NibbleArray,
    /// Classification of block ids.
    table: BlockTable,
}

impl VoxelGrid {

    /// Create a new grid full of air blocks. Each component of the size must be
    /// positive and the total volume must be addressable.
    pub fn new(origin: IVec3, size: IVec3, table: BlockTable) -> Result<Self, GridError> {
        let volume = calc_volume(size)?;
        Ok(Self {
            origin,
            size,
            block: vec![AIR; volume],
            metadata: NibbleArray::new(volume),
            table,
        })
    }

    /// Rebuild a grid from its raw arrays, as produced by [`Self::write_data_to`].
    pub(crate) fn from_raw_parts(
        origin: IVec3,
        size: IVec3,
        block: Vec<u8>,
        metadata: Vec<u8>,
        table: BlockTable,
    ) -> Result<Self, GridError> {

        let volume = calc_volume(size)?;
        if block.len() != volume || metadata.len() != volume.div_ceil(2) {
            return Err(GridError::InvalidData);
        }

        Ok(Self {
            origin,
            size,
            block,
            metadata: NibbleArray { inner: metadata },
            table,
        })

    }

    #[inline]
    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> IVec3 {
        self.size
    }

    #[inline]
    pub fn table(&self) -> &BlockTable {
        &self.table
    }

    /// Return true if the given world position is inside this grid.
    #[inline]
    pub fn contains(&self, pos: IVec3) -> bool {
        self.calc_index(pos).is_some()
    }

    /// Calculate the index in the grid's arrays for the given world position. Blocks
    /// are stored in X, Z, Y order so that columns are contiguous.
    #[inline]
    fn calc_index(&self, pos: IVec3) -> Option<usize> {
        let local = pos - self.origin;
        if local.cmplt(IVec3::ZERO).any() || local.cmpge(self.size).any() {
            return None;
        }
        let (x, y, z) = (local.x as usize, local.y as usize, local.z as usize);
        Some((x * self.size.z as usize + z) * self.size.y as usize + y)
    }

    /// Get block id and metadata at the given world position, none if outside.
    #[inline]
    pub fn block(&self, pos: IVec3) -> Option<(u8, u8)> {
        let index = self.calc_index(pos)?;
        Some((self.block[index], self.metadata.get(index)))
    }

    /// Set block id and metadata at the given world position, returning the previous
    /// block and metadata, or none if outside.
    #[inline]
    pub fn set_block_and_metadata(&mut self, pos: IVec3, id: u8, metadata: u8) -> Option<(u8, u8)> {
        let index = self.calc_index(pos)?;
        let prev = (self.block[index], self.metadata.get(index));
        self.block[index] = id;
        self.metadata.set(index, metadata & 0x0F);
        Some(prev)
    }

    /// Fill the given area with the given block id and metadata, positions outside of
    /// the grid are skipped.
    pub fn fill(&mut self, start: IVec3, size: IVec3, id: u8, metadata: u8) {
        for x in start.x..start.x + size.x {
            for z in start.z..start.z + size.z {
                for y in start.y..start.y + size.y {
                    self.set_block_and_metadata(IVec3::new(x, y, z), id, metadata);
                }
            }
        }
    }

    /// Count the blocks with the given id.
    pub fn count(&self, id: u8) -> usize {
        self.block.iter().filter(|&&b| b == id).count()
    }

    /// Iterate over every world position of this grid, in storage order.
    pub fn positions(&self) -> impl Iterator<Item = IVec3> + '_ {
        let (origin, size) = (self.origin, self.size);
        (0..size.x).flat_map(move |x| {
            (0..size.z).flat_map(move |z| {
                (0..size.y).map(move |y| origin + IVec3::new(x, y, z))
            })
        })
    }

    /// Return every world position where this grid and the other one differ in block
    /// or metadata. Both grids must share origin and size, otherwise none is returned.
    pub fn diff(&self, other: &VoxelGrid) -> Option<Vec<IVec3>> {

        if self.origin != other.origin || self.size != other.size {
            return None;
        }

        Some(self.positions()
            .enumerate()
            .filter(|&(index, _)| {
                self.block[index] != other.block[index]
                    || self.metadata.get(index) != other.metadata.get(index)
            })
            .map(|(_, pos)| pos)
            .collect())

    }

    /// Write the grid's data to the given writer, block ids then packed metadata.
    pub fn write_data_to(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(&self.block)?;
        writer.write_all(&self.metadata.inner)?;
        Ok(())
    }

}

impl BlockGrid for VoxelGrid {

    #[inline]
    fn kind(&self, pos: IVec3) -> VoxelKind {
        match self.block(pos) {
            Some((id, _)) => self.table.kind(id),
            None => VoxelKind::Solid,
        }
    }

    #[inline]
    fn set_block(&mut self, pos: IVec3, block: BlockState) {
        self.set_block_and_metadata(pos, block.id, block.metadata);
    }

    #[inline]
    fn is_plantable_surface(&self, pos: IVec3) -> bool {
        match self.block(pos) {
            Some((id, _)) => self.table.is_plantable(id),
            None => false,
        }
    }

}


/// Compute the number of blocks in a grid of the given size.
fn calc_volume(size: IVec3) -> Result<usize, GridError> {

    if size.cmple(IVec3::ZERO).any() {
        return Err(GridError::InvalidSize(size));
    }

    (size.x as usize)
        .checked_mul(size.y as usize)
        .and_then(|v| v.checked_mul(size.z as usize))
        .ok_or(GridError::InvalidSize(size))

}


/// Array that stores one `u4` value per block.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NibbleArray {
    inner: Vec<u8>,
}

impl NibbleArray {

    fn new(len: usize) -> Self {
        Self { inner: vec![0; len.div_ceil(2)] }
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        let slot = self.inner[index >> 1];
        if index & 1 == 0 {
            slot & 0x0F
        } else {
            (slot & 0xF0) >> 4
        }
    }

    #[inline]
    fn set(&mut self, index: usize, value: u8) {
        debug_assert!(value <= 0x0F);
        let slot = &mut self.inner[index >> 1];
        if index & 1 == 0 {
            *slot = (*slot & 0xF0) | value;
        } else {
            *slot = (*slot & 0x0F) | (value << 4);
        }
    }

}


/// Errors when building a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size: {0}")]
    InvalidSize(IVec3),
    #[error("grid data length doesn't match its size")]
    InvalidData,
}
