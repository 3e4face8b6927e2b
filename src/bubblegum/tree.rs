//! Concurrent Merkle tree account layout.
//!
//! ```text
//! [0]        account type (1 = concurrent merkle tree)
//! [1]        header version (0 = V1)
//! [2..56]    header V1: max_buffer_size u32, max_depth u32, authority,
//!            creation_slot u64, is_batch_initialized, padding
//! [56..80]   sequence_number u64, active_index u64, buffer_size u64
//! [80..]     change logs, then rightmost path, then canopy
//! ```

use thiserror::Error;

const HEADER_SIZE: usize = 56;
const TREE_META_SIZE: usize = 3 * 8;
const NODE_SIZE: usize = 32;
const ACCOUNT_TYPE_TREE: u8 = 1;

/// Deepest tree the account-compression program accepts.
pub const MAX_TREE_DEPTH: u32 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeAccountError {
    #[error("tree account too short: {len} bytes, need {needed}")]
    TooShort { len: usize, needed: usize },

    #[error("not a concurrent merkle tree account (type {0})")]
    WrongAccountType(u8),

    #[error("active change log {active_index} outside buffer of {buffer_size}")]
    ActiveIndexOutOfRange { active_index: u64, buffer_size: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeParamsError {
    #[error("tree depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("canopy depth {canopy_depth} exceeds tree depth {max_depth}")]
    CanopyTooDeep { canopy_depth: u32, max_depth: u32 },
}

/// Shape of a tree: depth, change-log buffer and cached canopy levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: u32,
}

impl TreeParams {
    /// Check the shape against what the compression program can allocate.
    pub fn validate(&self) -> Result<(), TreeParamsError> {
        if self.max_depth > MAX_TREE_DEPTH {
            return Err(TreeParamsError::DepthTooLarge {
                depth: self.max_depth,
                max: MAX_TREE_DEPTH,
            });
        }
        if self.canopy_depth > self.max_depth {
            return Err(TreeParamsError::CanopyTooDeep {
                canopy_depth: self.canopy_depth,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    /// Leaves the tree can hold.
    pub fn capacity(&self) -> u64 {
        1u64.checked_shl(self.max_depth).unwrap_or(u64::MAX)
    }

    /// Bytes to allocate for the tree account, canopy included.
    ///
    /// Saturates at `usize::MAX` for shapes `validate` rejects.
    pub fn account_size(&self) -> usize {
        let depth = self.max_depth as usize;
        let change_log = change_log_size(depth);
        let rightmost_path = depth * NODE_SIZE + NODE_SIZE + 8;
        let canopy_nodes = self
            .canopy_depth
            .checked_add(1)
            .and_then(|levels| 1usize.checked_shl(levels))
            .unwrap_or(usize::MAX)
            .saturating_sub(2);

        (HEADER_SIZE + TREE_META_SIZE + rightmost_path)
            .saturating_add((self.max_buffer_size as usize).saturating_mul(change_log))
            .saturating_add(canopy_nodes.saturating_mul(NODE_SIZE))
    }
}

/// root, path nodes, index u32, padding u32
fn change_log_size(depth: usize) -> usize {
    NODE_SIZE + depth * NODE_SIZE + 8
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Root recorded in the tree's active change log.
pub fn current_root(data: &[u8]) -> Result<[u8; 32], TreeAccountError> {
    let min = HEADER_SIZE + TREE_META_SIZE;
    if data.len() < min {
        return Err(TreeAccountError::TooShort {
            len: data.len(),
            needed: min,
        });
    }
    if data[0] != ACCOUNT_TYPE_TREE {
        return Err(TreeAccountError::WrongAccountType(data[0]));
    }

    let depth = read_u32(data, 6) as usize;
    let active_index = read_u64(data, HEADER_SIZE + 8);
    let buffer_size = read_u64(data, HEADER_SIZE + 16);
    if active_index >= buffer_size {
        return Err(TreeAccountError::ActiveIndexOutOfRange {
            active_index,
            buffer_size,
        });
    }

    let end = usize::try_from(active_index)
        .ok()
        .and_then(|index| index.checked_mul(change_log_size(depth)))
        .and_then(|offset| offset.checked_add(min + NODE_SIZE));
    let end = match end {
        Some(end) if end <= data.len() => end,
        other => {
            return Err(TreeAccountError::TooShort {
                len: data.len(),
                needed: other.unwrap_or(usize::MAX),
            });
        }
    };
    let offset = end - NODE_SIZE;

    let mut root = [0u8; 32];
    root.copy_from_slice(&data[offset..offset + NODE_SIZE]);
    Ok(root)
}
