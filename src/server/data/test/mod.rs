mod assignment;
mod sales_rep;
