mod coverage_tests;
