mod suggestions_tests;
