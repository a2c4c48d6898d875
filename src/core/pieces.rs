//! Pieces module - tetromino offset tables
//!
//! Each piece kind maps to four offset sets, one per rotation quadrant,
//! each containing exactly 4 (dx, dy) pairs relative to the piece origin.
//! Several kinds only have two distinct silhouettes (I, S, Z) or one (O);
//! the tables still carry all four quadrants so rotation is a plain index
//! advance.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
    }
}

/// I piece: vertical bar at 0/180, horizontal at 90/270
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(0, 1), (0, 0), (0, -1), (0, -2)],
        Rotation::R90 | Rotation::R270 => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    }
}

/// T piece
fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, -1), (-1, 0), (0, 0), (1, 0)],
        Rotation::R90 => [(0, -1), (0, 0), (1, 0), (0, 1)],
        Rotation::R180 => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        Rotation::R270 => [(0, -1), (-1, 0), (0, 0), (0, 1)],
    }
}

/// O piece (square, same for all rotations)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (1, 1), (0, 1)]
}

/// S piece (two distinct silhouettes)
fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(-1, -1), (-1, 0), (0, 0), (0, 1)],
        Rotation::R90 | Rotation::R270 => [(0, 0), (1, -1), (-1, 0), (0, -1)],
    }
}

/// Z piece (mirror of S)
fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(1, -1), (0, 0), (1, 0), (0, 1)],
        Rotation::R90 | Rotation::R270 => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

/// L piece
fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 0), (0, 1), (0, -1), (1, 1)],
        Rotation::R90 => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        Rotation::R180 => [(-1, -1), (0, -1), (0, 0), (0, 1)],
        Rotation::R270 => [(-1, 0), (0, 0), (1, 0), (1, -1)],
    }
}

/// J piece (mirror of L)
fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 0), (0, 1), (0, -1), (1, -1)],
        Rotation::R90 => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        Rotation::R180 => [(0, 0), (0, 1), (0, -1), (-1, 1)],
        Rotation::R270 => [(0, 0), (1, 0), (-1, 0), (-1, -1)],
    }
}
