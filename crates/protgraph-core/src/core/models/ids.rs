use slotmap::new_key_type;

// Generational keys; equality is identity of the stored entity.
new_key_type! {
    pub struct AtomId;
    pub struct ResidueId;
    pub struct ChainId;
}
