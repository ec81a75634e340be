mod model;
mod storage;
mod test_error;
