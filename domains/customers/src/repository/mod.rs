pub mod customers;

pub use customers::CustomerRepository;
