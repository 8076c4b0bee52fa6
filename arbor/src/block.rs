//! Block states and the classification of block ids used by generators.
//!
//! Generators never care about the identity of a block, they only need to know if a
//! block can be grown through (air and leaves) or not. The host decides which of its
//! ids falls in which class through a [`BlockTable`].


/// Internal macro to define the reference block ids used by the default table.
macro_rules! blocks {
    (
        $($ident:ident / $id:literal : $name:literal),* $(,)?
    ) => {

        static NAMES: [&'static str; 256] = {
            let mut arr = [""; 256];
            $(arr[$id as usize] = $name;)*
            arr
        };

        $(pub const $ident: u8 = $id;)*

    };
}

blocks! {
    AIR/0:              "air",
    STONE/1:            "stone",
    GRASS/2:            "grass",
    DIRT/3:             "dirt",
    COBBLESTONE/4:      "cobblestone",
    LOG/17:             "log",
    LEAVES/18:          "leaves",
    AUTUMN_LEAVES/170:  "autumn_leaves",
}

/// Get the name of a reference block id, empty if the id has no reference name.
#[inline]
pub fn name(id: u8) -> &'static str {
    NAMES[id as usize]
}


/// The only distinction a generator makes between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelKind {
    /// Nothing, can be replaced.
    Air,
    /// Leaves, can be replaced by trunks and other leaves.
    Leaf,
    /// Anything else, this includes positions that cannot be addressed.
    Solid,
}

impl VoxelKind {

    /// Return true if a tree is allowed to grow through this kind of voxel.
    #[inline]
    pub fn is_replaceable(self) -> bool {
        matches!(self, VoxelKind::Air | VoxelKind::Leaf)
    }

}


/// A block id together with its metadata variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockState {
    pub id: u8,
    pub metadata: u8,
}

impl BlockState {

    #[inline]
    pub const fn new(id: u8, metadata: u8) -> Self {
        Self { id, metadata }
    }

}


/// Host-supplied classification of the 256 block ids into [`VoxelKind`]s, and the set
/// of ids on which a tree can be planted.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockTable {
    kinds: [VoxelKind; 256],
    plantable: [bool; 256],
}

impl BlockTable {

    /// Create a table where only the id 0 is air, everything else is solid and nothing
    /// is plantable.
    pub fn new() -> Self {
        let mut kinds = [VoxelKind::Solid; 256];
        kinds[AIR as usize] = VoxelKind::Air;
        Self {
            kinds,
            plantable: [false; 256],
        }
    }

    /// The table matching reference ids of this module: leaves and autumn leaves are
    /// leaves, trees can be planted on grass and dirt.
    pub fn classic() -> Self {
        Self::new()
            .with_kind(LEAVES, VoxelKind::Leaf)
            .with_kind(AUTUMN_LEAVES, VoxelKind::Leaf)
            .with_plantable(GRASS)
            .with_plantable(DIRT)
    }

    #[inline]
    pub fn with_kind(mut self, id: u8, kind: VoxelKind) -> Self {
        self.kinds[id as usize] = kind;
        self
    }

    #[inline]
    pub fn with_plantable(mut self, id: u8) -> Self {
        self.plantable[id as usize] = true;
        self
    }

    #[inline]
    pub fn kind(&self, id: u8) -> VoxelKind {
        self.kinds[id as usize]
    }

    #[inline]
    pub fn is_plantable(&self, id: u8) -> bool {
        self.plantable[id as usize]
    }

}

impl Default for BlockTable {
    fn default() -> Self {
        Self::classic()
    }
}

impl std::fmt::Debug for BlockTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leaves = (0..=255u8).filter(|&id| self.kind(id) == VoxelKind::Leaf).collect::<Vec<_>>();
        let air = (0..=255u8).filter(|&id| self.kind(id) == VoxelKind::Air).collect::<Vec<_>>();
        let plantable = (0..=255u8).filter(|&id| self.is_plantable(id)).collect::<Vec<_>>();
        f.debug_struct("BlockTable")
            .field("air", &air)
            .field("leaves", &leaves)
            .field("plantable", &plantable)
            .finish()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn classic_table() {

        let table = BlockTable::classic();
        assert_eq!(table.kind(AIR), VoxelKind::Air);
        assert_eq!(table.kind(LEAVES), VoxelKind::Leaf);
        assert_eq!(table.kind(AUTUMN_LEAVES), VoxelKind::Leaf);
        assert_eq!(table.kind(LOG), VoxelKind::Solid);
        assert_eq!(table.kind(STONE), VoxelKind::Solid);
        assert!(table.is_plantable(GRASS));
        assert!(table.is_plantable(DIRT));
        assert!(!table.is_plantable(STONE));
        assert!(!table.is_plantable(AIR));

        assert_eq!(name(LOG), "log");
        assert_eq!(name(200), "");

    }

}
