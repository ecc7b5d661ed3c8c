pub mod udp_tracker_client;
