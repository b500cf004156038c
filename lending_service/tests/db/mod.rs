mod test_lending_db;
