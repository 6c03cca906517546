// Code generated by protoc-gen-protoerr. DO NOT EDIT.
// versions: protoc-gen-protoerr v0.1.0-alpha.1
// source: errors/test_error.proto

/// Error codes of `TestError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestError {
    /// `TEST_ERROR_UNSPECIFIED = 0`
    TestErrorUnspecified,
    /// `TEST_ERROR_INVALID_FIELD_TEST1 = 1000`
    TestErrorInvalidFieldTest1,
    /// `TEST_ERROR_INVALID_PATH_TEST2 = 1001`
    TestErrorInvalidPathTest2,
    /// A value not declared in the schema.
    Unrecognized(i32),
}
impl ::core::convert::From<i32> for TestError {
    fn from(value: i32) -> Self {
        match value {
            0 => TestError::TestErrorUnspecified,
            1000 => TestError::TestErrorInvalidFieldTest1,
            1001 => TestError::TestErrorInvalidPathTest2,
            other => TestError::Unrecognized(other),
        }
    }
}
impl ::core::convert::From<TestError> for i32 {
    fn from(value: TestError) -> i32 {
        match value {
            TestError::TestErrorUnspecified => 0,
            TestError::TestErrorInvalidFieldTest1 => 1000,
            TestError::TestErrorInvalidPathTest2 => 1001,
            TestError::Unrecognized(other) => other,
        }
    }
}
impl ::protoerr::ErrorCode for TestError {
    fn code(self) -> i32 {
        match self {
            TestError::TestErrorUnspecified => 0,
            TestError::TestErrorInvalidFieldTest1 => 1000,
            TestError::TestErrorInvalidPathTest2 => 1001,
            _ => 0,
        }
    }
    fn status(self) -> i32 {
        match self {
            TestError::TestErrorUnspecified => 503,
            TestError::TestErrorInvalidFieldTest1 => 400,
            TestError::TestErrorInvalidPathTest2 => 400,
            _ => 503,
        }
    }
    fn message(self) -> &'static str {
        match self {
            TestError::TestErrorUnspecified => "",
            TestError::TestErrorInvalidFieldTest1 => "Invalid field_test1 value",
            TestError::TestErrorInvalidPathTest2 => "",
            _ => "",
        }
    }
    fn as_str(self) -> &'static str {
        match self {
            TestError::TestErrorUnspecified => "TestError_TEST_ERROR_UNSPECIFIED",
            TestError::TestErrorInvalidFieldTest1 => "INVALID_ARGUMENT",
            TestError::TestErrorInvalidPathTest2 => "TestError_TEST_ERROR_INVALID_PATH_TEST2",
            _ => "TestError:UNKNOWN_ERROR",
        }
    }
}
impl ::core::fmt::Display for TestError {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(::protoerr::ErrorCode::as_str(*self))
    }
}
impl ::core::error::Error for TestError {}
impl TestError {
    /// The status of values that do not declare one.
    pub const DEFAULT_STATUS: i32 = 503;
    /// Joins this value with `errors` and builds an error with `::protoerr::new_error`.
    ///
    /// The message is this value's message, or its text if the message is empty.
    pub fn join<I>(self, errors: I) -> ::protoerr::BoxError
    where
        I: ::core::iter::IntoIterator<Item = ::protoerr::BoxError>,
    {
        self.join_with_message(::protoerr::ErrorCode::display_message(self), errors)
    }
    /// Joins this value with `errors` and builds an error with `::protoerr::new_error`, using `message` as is.
    pub fn join_with_message<I>(self, message: &str, errors: I) -> ::protoerr::BoxError
    where
        I: ::core::iter::IntoIterator<Item = ::protoerr::BoxError>,
    {
        let cause = ::protoerr::join(::protoerr::JoinOrder::Prepend, self, errors);
        ::protoerr::new_error(
            ::protoerr::ErrorCode::status(self),
            ::protoerr::ErrorCode::code(self),
            message,
            cause,
        )
    }
}
