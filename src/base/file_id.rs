/// Identifier of a file inside an [`AnalysisHost`](crate::ide::AnalysisHost).
///
/// Ids are dense indices into the host's file table and stay valid until a
/// file is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}
