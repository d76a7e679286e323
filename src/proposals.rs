multiversx_sc::imports!();

use crate::types::{Proposal, MAX_PROPOSAL_NAME_LEN};

/// Proposal registry: sequential ids from 1, one vote counter per proposal.
#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::access::AccessControlModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: addProposal
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(&self, name: ManagedBuffer) -> u8 {
        let caller = self.blockchain().get_caller();
        self.add_proposal_as(&caller, name)
    }

    fn add_proposal_as(&self, caller: &ManagedAddress, name: ManagedBuffer) -> u8 {
        self.require_chairperson(caller);
        require!(
            !name.is_empty() && name.len() <= MAX_PROPOSAL_NAME_LEN,
            "Proposal name must be 1 to 31 bytes"
        );

        let new_id = match self.proposal_count().get().checked_add(1) {
            Some(id) => id,
            None => sc_panic!("Capacity exceeded"),
        };

        self.proposals(new_id).set(&Proposal::new(new_id, name.clone()));
        self.proposal_count().set(new_id);

        self.proposal_added_event(new_id, &name);

        new_id
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Valid ids are `1..=proposal_count`, for voting, reads and tally alike.
    fn proposal_exists(&self, id: u8) -> bool {
        id >= 1 && id <= self.proposal_count().get()
    }

    fn require_proposal(&self, id: u8) -> Proposal<Self::Api> {
        require!(self.proposal_exists(id), "Proposal does not exist");
        self.proposals(id).get()
    }

    /// Credits `weight` to a proposal the caller already checked exists.
    fn record_vote(&self, id: u8, weight: u32) {
        let mut proposal = self.proposals(id).get();
        proposal.vote_count = match proposal.vote_count.checked_add(weight) {
            Some(total) => total,
            None => sc_panic!("Capacity exceeded"),
        };
        self.proposals(id).set(&proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u8) -> Proposal<Self::Api> {
        self.require_proposal(id)
    }

    #[view(getProposalVote)]
    fn get_proposal_vote(&self, id: u8) -> u32 {
        self.require_proposal(id).vote_count
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u8, count: u8) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u8 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Id of the most recently added proposal, which is also the proposal count.
    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u8) -> SingleValueMapper<Proposal<Self::Api>>;
}
