mod notify_tests;
mod render_tests;
mod transport_tests;
