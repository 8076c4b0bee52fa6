//! Export and import of voxel grids to a compact binary format.
//!
//! The format starts with the `ARBR` magic and a version byte, followed by the grid
//! origin and size as big endian 32-bit integers. The rest of the file is a zlib
//! stream of the block ids followed by the packed metadata nibbles.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use glam::IVec3;
use thiserror::Error;

use crate::block::BlockTable;
use crate::grid::{GridError, VoxelGrid};


const MAGIC: [u8; 4] = *b"ARBR";
const VERSION: u8 = 1;


/// Write the given grid to the writer.
pub fn write_grid(mut writer: impl Write, grid: &VoxelGrid) -> io::Result<()> {

    writer.write_all(&MAGIC)?;
    writer.write_u8(VERSION)?;
    write_ivec3(&mut writer, grid.origin())?;
    write_ivec3(&mut writer, grid.size())?;

    let mut encoder = ZlibEncoder::new(writer, Compression::default());
    grid.write_data_to(&mut encoder)?;
    encoder.finish()?.flush()

}

/// Read a grid from the reader, the block table is not part of the format and must be
/// given by the caller.
pub fn read_grid(mut reader: impl Read, table: BlockTable) -> Result<VoxelGrid, ReadGridError> {

    let mut magic = [0; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReadGridError::IllegalMagic);
    }

    let version = reader.read_u8()?;
    if version != VERSION {
        return Err(ReadGridError::UnsupportedVersion(version));
    }

    let origin = read_ivec3(&mut reader)?;
    let size = read_ivec3(&mut reader)?;
    if size.cmple(IVec3::ZERO).any() {
        return Err(GridError::InvalidSize(size).into());
    }

    let volume = size.x as u64 * size.y as u64 * size.z as u64;
    let mut decoder = ZlibDecoder::new(reader);

    let mut block = Vec::new();
    (&mut decoder).take(volume).read_to_end(&mut block)?;
    let mut metadata = Vec::new();
    (&mut decoder).take(volume.div_ceil(2)).read_to_end(&mut metadata)?;

    Ok(VoxelGrid::from_raw_parts(origin, size, block, metadata, table)?)

}

fn write_ivec3(writer: &mut impl Write, v: IVec3) -> io::Result<()> {
    writer.write_i32::<BE>(v.x)?;
    writer.write_i32::<BE>(v.y)?;
    writer.write_i32::<BE>(v.z)
}

fn read_ivec3(reader: &mut impl Read) -> io::Result<IVec3> {
    Ok(IVec3::new(
        reader.read_i32::<BE>()?,
        reader.read_i32::<BE>()?,
        reader.read_i32::<BE>()?,
    ))
}


/// Errors when reading a grid.
#[derive(Error, Debug)]
pub enum ReadGridError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    #[error("illegal magic")]
    IllegalMagic,
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::block;
    use crate::feature::tree::{BigTreeGenerator, TreePalette};

    #[test]
    fn tree_round_trip() {

        let mut grid = VoxelGrid::new(IVec3::new(-12, 0, -12), IVec3::new(24, 32, 24), BlockTable::classic()).unwrap();
        grid.fill(IVec3::new(-12, 0, -12), IVec3::new(24, 1, 24), block::GRASS, 0);
        assert!(BigTreeGenerator::new(TreePalette::oak()).generate(&mut grid, 8, IVec3::new(0, 1, 0)));

        let mut data: Vec<u8> = Vec::new();
        write_grid(&mut data, &grid).unwrap();
        assert_eq!(&data[..4], b"ARBR");

        let read = read_grid(&data[..], BlockTable::classic()).unwrap();
        assert_eq!(read, grid);

    }

    #[test]
    fn illegal_header() {

        let err = read_grid(&b"ABCD\x01"[..], BlockTable::classic()).unwrap_err();
        assert!(matches!(err, ReadGridError::IllegalMagic));

        let err = read_grid(&b"ARBR\x02"[..], BlockTable::classic()).unwrap_err();
        assert!(matches!(err, ReadGridError::UnsupportedVersion(2)));

        let err = read_grid(&b"ARBR\x01\x00\x00"[..], BlockTable::classic()).unwrap_err();
        assert!(matches!(err, ReadGridError::Io(_)));

    }

    #[test]
    fn truncated_data() {

        let grid = VoxelGrid::new(IVec3::ZERO, IVec3::new(4, 4, 4), BlockTable::classic()).unwrap();
        let mut data: Vec<u8> = Vec::new();
        write_grid(&mut data, &grid).unwrap();

        // Pretend the grid is larger than the data it contains.
        data[4 + 1 + 12 + 3] = 8;
        let err = read_grid(&data[..], BlockTable::classic()).unwrap_err();
        assert!(matches!(err, ReadGridError::Grid(GridError::InvalidData)));

    }

}
