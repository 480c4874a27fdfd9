pub mod scripted_capability;
