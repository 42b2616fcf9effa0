mod ordination;
