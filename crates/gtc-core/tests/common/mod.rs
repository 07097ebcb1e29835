pub mod geotag_server;
