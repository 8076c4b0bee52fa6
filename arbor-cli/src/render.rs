//! Text rendering of a grid seen from its side.

use glam::IVec3;

use arbor::block::VoxelKind;
use arbor::grid::{BlockGrid, VoxelGrid};


/// Render the grid projected along the Z axis, the top row is the highest non-empty
/// row. Wood blocks of the given id are drawn `#`, leaves `*` and any other solid
/// block `=`, wood hides leaves that hide other blocks.
pub fn render_side(grid: &VoxelGrid, wood_id: u8) -> String {

    let origin = grid.origin();
    let size = grid.size();

    let mut rows = Vec::with_capacity(size.y as usize);

    for y in (origin.y..origin.y + size.y).rev() {

        let row = (origin.x..origin.x + size.x).map(|x| {
            let mut ch = ' ';
            for z in origin.z..origin.z + size.z {
                let pos = IVec3::new(x, y, z);
                let cell = match (grid.kind(pos), grid.block(pos)) {
                    (_, Some((id, _))) if id == wood_id => '#',
                    (VoxelKind::Leaf, _) => '*',
                    (VoxelKind::Solid, _) => '=',
                    (VoxelKind::Air, _) => ' ',
                };
                ch = match (ch, cell) {
                    ('#', _) | (_, '#') => '#',
                    ('*', _) | (_, '*') => '*',
                    ('=', _) | (_, '=') => '=',
                    _ => ' ',
                };
            }
            ch
        }).collect::<String>();

        if rows.is_empty() && row.trim().is_empty() {
            continue;
        }

        rows.push(row.trim_end().to_string());

    }

    rows.join("\n")

}
