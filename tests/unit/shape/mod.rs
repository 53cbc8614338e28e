mod victre;
