crate::entity_id! { AccountId }
crate::entity_id! { EntryId }
crate::entity_id! { TransferId }
