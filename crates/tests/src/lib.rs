#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod case_tests;
#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod judgment_tests;
#[cfg(test)]
mod notification_tests;
#[cfg(test)]
mod schedule_tests;
#[cfg(test)]
mod user_tests;
