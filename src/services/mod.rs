// Backend services
// Clients for the HTTP APIs the pages read from

pub mod student_profile;
