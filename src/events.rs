multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalAdded")]
    fn proposal_added_event(&self, #[indexed] id: u8, name: &ManagedBuffer);

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u8,
        weight: u32,
    );

    #[event("delegate")]
    fn delegate_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        weight: u32,
    );
}
