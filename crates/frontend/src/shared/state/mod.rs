pub mod rental_state;
