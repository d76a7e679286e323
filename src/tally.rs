multiversx_sc::imports!();

/// Read-only leaderboard over the proposal registry.
#[multiversx_sc::module]
pub trait TallyModule:
    crate::access::AccessControlModule
    + crate::events::EventsModule
    + crate::proposals::ProposalsModule
{
    /// Id with the strictly highest vote count; ties go to the lowest id.
    /// Falls back to 1 when nothing has been proposed yet.
    #[view(winningProposal)]
    fn winning_proposal(&self) -> u8 {
        let mut best_id = 1u8;
        let mut best_count = 0u32;

        for id in 1..=self.proposal_count().get() {
            let vote_count = self.proposals(id).get().vote_count;
            if vote_count > best_count {
                best_id = id;
                best_count = vote_count;
            }
        }
        best_id
    }

    #[view(winnerName)]
    fn winner_name(&self) -> ManagedBuffer {
        self.require_proposal(self.winning_proposal()).name
    }
}
