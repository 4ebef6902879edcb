use serde::{Deserialize, Serialize};

/// Cell width of a [PackedVec], the narrowest integer covering the widest
/// column span of a range genotype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWidth {
    U8,
    U16,
    U32,
    U64,
}

impl CellWidth {
    pub fn for_max(max: u64) -> Self {
        if max <= u8::MAX as u64 {
            CellWidth::U8
        } else if max <= u16::MAX as u64 {
            CellWidth::U16
        } else if max <= u32::MAX as u64 {
            CellWidth::U32
        } else {
            CellWidth::U64
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            CellWidth::U8 => 1,
            CellWidth::U16 => 2,
            CellWidth::U32 => 4,
            CellWidth::U64 => 8,
        }
    }
}

/// Fixed-width integer cells over a single byte-backed buffer, addressed by
/// stride. Values must fit the cell width.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackedVec {
    cell: CellWidth,
    data: Vec<u8>,
}

impl PackedVec {
    pub fn new(cell: CellWidth) -> Self {
        Self { cell, data: vec![] }
    }

    pub fn with_capacity(cell: CellWidth, capacity: usize) -> Self {
        Self {
            cell,
            data: Vec::with_capacity(capacity * cell.bytes()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.cell.bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> u64 {
        let stride = self.cell.bytes();
        let bytes = &self.data[index * stride..(index + 1) * stride];
        match self.cell {
            CellWidth::U8 => bytes[0] as u64,
            CellWidth::U16 => u16::from_le_bytes([bytes[0], bytes[1]]) as u64,
            CellWidth::U32 => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64,
            CellWidth::U64 => u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
        }
    }

    pub fn set(&mut self, index: usize, value: u64) {
        debug_assert!(self.fits(value));
        let stride = self.cell.bytes();
        self.data[index * stride..(index + 1) * stride]
            .copy_from_slice(&value.to_le_bytes()[..stride]);
    }

    pub fn push(&mut self, value: u64) {
        debug_assert!(self.fits(value));
        let stride = self.cell.bytes();
        self.data.extend_from_slice(&value.to_le_bytes()[..stride]);
    }

    pub fn pop(&mut self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            let value = self.get(self.len() - 1);
            self.data.truncate(self.data.len() - self.cell.bytes());
            Some(value)
        }
    }

    pub fn remove_first(&mut self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            let value = self.get(0);
            self.data.drain(..self.cell.bytes());
            Some(value)
        }
    }

    pub fn insert_first(&mut self, value: u64) {
        debug_assert!(self.fits(value));
        let bytes = value.to_le_bytes();
        self.data.splice(..0, bytes[..self.cell.bytes()].iter().copied());
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len()).map(|index| self.get(index))
    }

    fn fits(&self, value: u64) -> bool {
        match self.cell {
            CellWidth::U8 => value <= u8::MAX as u64,
            CellWidth::U16 => value <= u16::MAX as u64,
            CellWidth::U32 => value <= u32::MAX as u64,
            CellWidth::U64 => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_width_for_max() {
        assert_eq!(CellWidth::for_max(0), CellWidth::U8);
        assert_eq!(CellWidth::for_max(255), CellWidth::U8);
        assert_eq!(CellWidth::for_max(256), CellWidth::U16);
        assert_eq!(CellWidth::for_max(65_536), CellWidth::U32);
        assert_eq!(CellWidth::for_max(u64::MAX), CellWidth::U64);
    }

    #[test]
    fn push_get_set_roundtrip() {
        for cell in [CellWidth::U8, CellWidth::U16, CellWidth::U32, CellWidth::U64] {
            let mut packed = PackedVec::new(cell);
            packed.push(3);
            packed.push(0);
            packed.push(200);
            assert_eq!(packed.len(), 3);
            assert_eq!(packed.iter().collect::<Vec<_>>(), vec![3, 0, 200]);
            packed.set(1, 77);
            assert_eq!(packed.get(1), 77);
        }
    }

    #[test]
    fn edge_operations() {
        let mut packed = PackedVec::new(CellWidth::U16);
        packed.push(1000);
        packed.push(2000);
        assert_eq!(packed.pop(), Some(2000));
        packed.insert_first(500);
        assert_eq!(packed.iter().collect::<Vec<_>>(), vec![500, 1000]);
        assert_eq!(packed.remove_first(), Some(500));
        assert_eq!(packed.remove_first(), Some(1000));
        assert_eq!(packed.remove_first(), None);
        assert_eq!(packed.pop(), None);
    }
}
