// Node id
pub type Idx = u32;
