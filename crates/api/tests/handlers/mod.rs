mod application_test;
mod drive_test;
mod middleware_test;
