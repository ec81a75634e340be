mod test_store;
