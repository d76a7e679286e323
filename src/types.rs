multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Longest proposal name accepted by `addProposal`, in bytes.
pub const MAX_PROPOSAL_NAME_LEN: usize = 31;

// ============================================================
// Proposal — a named option voters can back
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Sequential id, starting at 1.
    pub id: u8,
    pub name: ManagedBuffer<M>,
    /// Accumulated weight of every vote cast for this proposal. Only grows.
    pub vote_count: u32,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(id: u8, name: ManagedBuffer<M>) -> Self {
        Proposal {
            id,
            name,
            vote_count: 0,
        }
    }
}

// ============================================================
// Voter — registration, weight and ballot status
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Voter<M: ManagedTypeApi> {
    /// Set by both voting and delegating. Implies `weight == 0`.
    pub has_voted: bool,
    pub is_registered: bool,
    pub weight: u32,
    /// Zero address unless the voter delegated.
    pub delegate: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> Voter<M> {
    pub fn registered() -> Self {
        Voter {
            has_voted: false,
            is_registered: true,
            weight: 1,
            delegate: ManagedAddress::zero(),
        }
    }

    pub fn status(&self) -> VoterStatus {
        if !self.has_voted {
            VoterStatus::Eligible
        } else if self.delegate.is_zero() {
            VoterStatus::Voted
        } else {
            VoterStatus::Delegated
        }
    }
}

// ============================================================
// Voter Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoterStatus {
    /// Never registered by the chairperson.
    Unregistered,
    /// Registered and still holding a ballot.
    Eligible,
    /// Spent their weight on a proposal. Terminal.
    Voted,
    /// Handed their weight to another voter. Terminal.
    Delegated,
}
