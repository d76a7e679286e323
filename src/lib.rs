#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod events;
pub mod proposals;
pub mod tally;
pub mod types;
pub mod voters;

// ============================================================
// Contract
// ============================================================

/// Chairperson-run ballot.
///
/// The chairperson registers proposals and voters. Each voter holds a weight
/// of 1 and either spends it on a proposal or hands it, in a single hop, to
/// another registered voter who has not voted yet. `winningProposal` reports
/// the current leader at any time.
#[multiversx_sc::contract]
pub trait Ballot:
    access::AccessControlModule
    + events::EventsModule
    + proposals::ProposalsModule
    + voters::VotersModule
    + tally::TallyModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, chairperson: ManagedAddress) {
        self.chairperson().set(&chairperson);
        self.proposal_count().set(0u8);
    }

    /// Keeps all storage, the chairperson included.
    #[upgrade]
    fn upgrade(&self) {}
}
