pub mod mint_service;
