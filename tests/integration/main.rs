mod booking_tests;
mod property_tests;
mod transport_tests;
