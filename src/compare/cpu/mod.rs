mod crossfit;
