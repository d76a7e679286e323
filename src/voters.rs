multiversx_sc::imports!();

use crate::types::{Voter, VoterStatus};

/// Voter registry plus the two ways a voter can use their ballot:
/// casting it on a proposal or handing its weight to another voter.
///
/// Every voter moves `Unregistered -> Eligible -> {Voted | Delegated}`.
/// Both end states are terminal and carry `has_voted = true, weight = 0`.
#[multiversx_sc::module]
pub trait VotersModule:
    crate::access::AccessControlModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: registerVoter
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, voter: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.register_voter_as(&caller, &voter);
    }

    fn register_voter_as(&self, caller: &ManagedAddress, voter: &ManagedAddress) {
        self.require_chairperson(caller);
        require!(self.voters(voter).is_empty(), "Voter already registered");

        let record: Voter<Self::Api> = Voter::registered();
        self.voters(voter).set(&record);
        self.registered_voters().insert(voter.clone());

        self.voter_registered_event(voter);
    }

    // ========================================================
    // ENDPOINT: delegate
    // Single hop: the target absorbs the weight as-is, even if
    // the target later delegates it onward.
    // ========================================================

    #[endpoint(delegate)]
    fn delegate_vote(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.delegate_vote_as(&caller, &to);
    }

    fn delegate_vote_as(&self, caller: &ManagedAddress, to: &ManagedAddress) {
        require!(caller != to, "Self-delegation is not allowed");

        let mut sender = self.require_voter(caller);
        let mut target = self.require_voter(to);
        require!(!sender.has_voted, "Voter already voted");
        require!(!target.has_voted, "Voter already voted");

        let moved = sender.weight;
        target.weight = match target.weight.checked_add(moved) {
            Some(weight) => weight,
            None => sc_panic!("Capacity exceeded"),
        };
        sender.has_voted = true;
        sender.weight = 0;
        sender.delegate = to.clone();

        self.voters(caller).set(&sender);
        self.voters(to).set(&target);

        self.delegate_event(caller, to, moved);
    }

    // ========================================================
    // ENDPOINT: vote
    // The whole weight is spent on one proposal.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u8) {
        let caller = self.blockchain().get_caller();
        self.vote_as(&caller, proposal_id);
    }

    fn vote_as(&self, caller: &ManagedAddress, proposal_id: u8) {
        require!(self.proposal_exists(proposal_id), "Proposal does not exist");

        let mut voter = self.require_voter(caller);
        require!(!voter.has_voted, "Voter already voted");
        require!(voter.weight > 0, "No voting weight");

        let weight = voter.weight;
        self.record_vote(proposal_id, weight);

        voter.has_voted = true;
        voter.weight = 0;
        voter.delegate = ManagedAddress::zero();
        self.voters(caller).set(&voter);

        self.voted_event(caller, proposal_id, weight);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_voter(&self, address: &ManagedAddress) -> Voter<Self::Api> {
        require!(!self.voters(address).is_empty(), "Voter not registered");
        self.voters(address).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVoter)]
    fn get_voter(&self, address: ManagedAddress) -> Voter<Self::Api> {
        self.require_voter(&address)
    }

    #[view(isRegistered)]
    fn is_registered(&self, address: ManagedAddress) -> bool {
        !self.voters(&address).is_empty()
    }

    #[view(getVoterStatus)]
    fn get_voter_status(&self, address: ManagedAddress) -> VoterStatus {
        if self.voters(&address).is_empty() {
            return VoterStatus::Unregistered;
        }
        self.voters(&address).get().status()
    }

    #[view(getVoters)]
    fn get_voters(&self, from: usize, count: usize) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.registered_voters().len());

        for (idx, voter) in self.registered_voters().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(voter);
            }
        }
        result
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self) -> usize {
        self.registered_voters().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter<Self::Api>>;

    #[storage_mapper("registeredVoters")]
    fn registered_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
