pub mod hashmap_merchant_store;
pub mod in_memory_agent_store;

pub use hashmap_merchant_store::HashMapMerchantStore;
pub use in_memory_agent_store::InMemoryAgentStore;
