/// Fixed-capacity, insertion-ordered vector stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TinyVec<T, const N: usize> {
    data: [Option<T>; N],
    len: u8,
}

impl<T, const N: usize> Default for TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { data: [None; N], len: 0 }
    }

    /// Copies up to `N` values from the slice; anything past capacity is left out.
    pub fn from_slice(values: &[T]) -> Self {
        let mut vec = Self::new();
        for (slot, &value) in vec.data.iter_mut().zip(values) {
            *slot = Some(value);
        }
        vec.len = values.len().min(N) as u8;
        vec
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data[..self.len as usize].iter().flatten()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Removes the first occurrence of `value`, keeping the order of the rest.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(pos) = self.iter().position(|v| v == value) else {
            return false;
        };
        let len = self.len as usize;
        self.data[pos..len].rotate_left(1);
        self.data[len - 1] = None;
        self.len -= 1;
        true
    }
}
