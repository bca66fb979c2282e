use thiserror::Error;

/// One draggable schedule entry. Ids are caller-assigned and unique within a
/// list; labels are display text like "CS 202".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    pub label: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("block id already in schedule: {id}")]
pub struct DuplicateIdError {
    pub id: String,
}

/// Ordered list of schedule blocks. Insertion order is the display order.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Inserts at the end. The list is left unchanged on an id collision.
    pub fn append(&mut self, block: Block) -> Result<(), DuplicateIdError> {
        if self.contains(&block.id) {
            return Err(DuplicateIdError { id: block.id });
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Removes the block with that id. Absent ids are a no-op, so a second
    /// remove of the same id reports false.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(i) => {
                self.blocks.remove(i);
                true
            }
            None => false,
        }
    }

    /// Stable single-element move: relocates `id` to sit immediately before
    /// `before_id`, keeping the relative order of everything else. No-op when
    /// either id is absent or the two ids are equal.
    pub fn move_before(&mut self, id: &str, before_id: &str) -> bool {
        if id == before_id || !self.contains(before_id) {
            return false;
        }
        let Some(from) = self.position(id) else {
            return false;
        };
        let block = self.blocks.remove(from);
        // before_id is still present after the removal above.
        let to = self.position(before_id).unwrap_or(self.blocks.len());
        self.blocks.insert(to, block);
        true
    }
}
